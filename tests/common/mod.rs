#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_xlsxwriter::Workbook;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vanlav_order::config::Config;
use vanlav_order::sample;
use vanlav_order::models::weather::{Condition, MainReadings, Wind};
use vanlav_order::models::{Cell, ForecastEntry, Location, RecordTable, Transaction};
use vanlav_order::weather::{
    InMemoryWeatherCache, WeatherError, WeatherLookup, WeatherProvider,
};

pub const BOUNDARY: &str = "vanlav-test-boundary";

pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn tx(now: NaiveDateTime, days_ago: i64, product: &str, quantity: f64) -> Transaction {
    Transaction {
        date: now - Duration::days(days_ago),
        product: product.to_string(),
        quantity,
    }
}

/// Table with text dates, the way a CSV upload arrives.
pub fn text_table(name: &str, now: NaiveDateTime, rows: &[(i64, &str, f64)]) -> RecordTable {
    let mut t = RecordTable::new(
        name,
        vec!["date".into(), "product".into(), "quantity".into()],
    );
    for &(days_ago, product, qty) in rows {
        t.push_row(vec![
            Cell::Text((now - Duration::days(days_ago)).format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::Text(product.to_string()),
            Cell::Number(qty),
        ]);
    }
    t
}

/// CSV body with dates relative to `now`.
pub fn csv_body(now: NaiveDateTime, rows: &[(i64, &str, f64)]) -> String {
    let mut body = String::from("date,product,quantity\n");
    for &(days_ago, product, qty) in rows {
        body.push_str(&format!(
            "{},{},{}\n",
            (now - Duration::days(days_ago)).format("%Y-%m-%d %H:%M:%S"),
            product,
            qty
        ));
    }
    body
}

/// (field name, file name, content)
pub fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, file_name, content) in parts {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, field, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Workbook with real date cells and Russian headers.
pub fn date_workbook(now: NaiveDateTime, rows: &[(i64, &str, f64)]) -> Vec<u8> {
    let records: Vec<Transaction> = rows
        .iter()
        .map(|&(days_ago, product, qty)| tx(now, days_ago, product, qty))
        .collect();
    sample::workbook_bytes(&records).unwrap()
}

/// Workbook whose dates are typed in as text, `dd.mm.yyyy`.
pub fn text_date_workbook(now: NaiveDateTime, rows: &[(i64, &str, f64)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in ["Дата", "Товар", "Кол-во"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (i, &(days_ago, product, qty)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        let date = (now - Duration::days(days_ago)).format("%d.%m.%Y").to_string();
        sheet.write_string(row, 0, date).unwrap();
        sheet.write_string(row, 1, product).unwrap();
        sheet.write_number(row, 2, qty).unwrap();
    }
    workbook.save_to_buffer().unwrap()
}

pub fn entry(dt_txt: &str, temp: f64, humidity: u8, description: &str, wind: f64) -> ForecastEntry {
    ForecastEntry {
        dt_txt: dt_txt.to_string(),
        main: MainReadings { temp, humidity },
        weather: vec![Condition {
            description: description.to_string(),
        }],
        wind: Wind { speed: wind },
    }
}

pub fn locations() -> HashMap<String, Location> {
    let mut locations = HashMap::new();
    locations.insert(
        "pyatigorsk".to_string(),
        Location::new(44.0486, 43.0594, "Пятигорск"),
    );
    locations.insert(
        "kislovodsk".to_string(),
        Location::new(43.9053, 43.1900, "Кисловодск"),
    );
    locations
}

pub fn test_config(base_url: &str) -> Config {
    let mut cfg = Config::from_env();
    cfg.weather_api_key = "test-key".to_string();
    cfg.weather_base_url = base_url.to_string();
    cfg.weather_lang = "ru".to_string();
    cfg.locations = locations();
    cfg.default_location = "pyatigorsk".to_string();
    cfg
}

/// A provider that replays a canned answer and counts calls.
pub struct MockProvider {
    response: Result<Vec<ForecastEntry>, u16>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn ok(entries: Vec<ForecastEntry>) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(entries),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            response: Err(status),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn fetch_forecast(&self, _location: &Location) -> Result<Vec<ForecastEntry>, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(entries) => Ok(entries.clone()),
            Err(status) => Err(WeatherError::Status {
                status: *status,
                body: "mock failure".to_string(),
            }),
        }
    }
}

pub fn lookup_with(provider: Arc<MockProvider>) -> (WeatherLookup, Arc<InMemoryWeatherCache>) {
    let cache = Arc::new(InMemoryWeatherCache::new());
    let lookup = WeatherLookup::new(provider, cache.clone(), locations(), "pyatigorsk");
    (lookup, cache)
}
