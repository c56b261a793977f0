use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use crate::config::Config;
use crate::models::weather::{Condition, MainReadings, Wind};
use crate::models::{Cell, ForecastEntry, Location, RecordTable, Transaction};

/// 2024-06-15 12:00, the clock every unit test runs against.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// A transaction `days_ago` days before `now`.
pub fn tx(now: NaiveDateTime, days_ago: i64, product: &str, quantity: f64) -> Transaction {
    Transaction {
        date: now - Duration::days(days_ago),
        product: product.to_string(),
        quantity,
    }
}

/// Build a table whose columns are in date, product, quantity order.
pub fn table(name: &str, columns: &[&str], rows: &[(i64, &str, f64)]) -> RecordTable {
    let now = fixed_now();
    let mut t = RecordTable::new(name, columns.iter().map(|c| c.to_string()).collect());
    for &(days_ago, product, qty) in rows {
        t.push_row(vec![
            Cell::DateTime(now - Duration::days(days_ago)),
            Cell::Text(product.to_string()),
            Cell::Number(qty),
        ]);
    }
    t
}

pub fn forecast_entry(dt_txt: &str, temp: f64, description: &str) -> ForecastEntry {
    ForecastEntry {
        dt_txt: dt_txt.to_string(),
        main: MainReadings { temp, humidity: 71 },
        weather: vec![Condition {
            description: description.to_string(),
        }],
        wind: Wind { speed: 3.2 },
    }
}

/// A Config suitable for testing: no API key, unroutable provider URL.
pub fn default_test_config() -> Config {
    let mut locations = HashMap::new();
    locations.insert(
        "pyatigorsk".to_string(),
        Location::new(44.0486, 43.0594, "Пятигорск"),
    );
    locations.insert(
        "kislovodsk".to_string(),
        Location::new(43.9053, 43.1900, "Кисловодск"),
    );

    Config {
        weather_api_key: String::new(),
        weather_base_url: "http://127.0.0.1:9".to_string(),
        weather_lang: "ru".to_string(),
        locations,
        default_location: "pyatigorsk".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
    }
}
