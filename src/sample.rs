use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use crate::models::{Column, Transaction};

pub const PRODUCTS: &[&str] = &[
    "Eclair",
    "Tiramisu",
    "Cheesecake",
    "Napoleon",
    "Medovik",
    "Praga",
    "Smetannik",
    "Bird's Milk",
    "Red Velvet",
    "Milk Cake",
];

/// Synthetic daily sales and write-offs for `days` days ending at `end`.
pub fn generate<R: Rng>(
    rng: &mut R,
    end: NaiveDateTime,
    days: i64,
) -> (Vec<Transaction>, Vec<Transaction>) {
    let start = (end - Duration::days(days)).date();
    let mut sales = Vec::new();
    let mut writeoffs = Vec::new();

    for offset in 0..=days {
        let day = start + Duration::days(offset);
        let date = day.and_time(chrono::NaiveTime::MIN);
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);

        let count = rng.gen_range(3..=8);
        for product in PRODUCTS.choose_multiple(rng, count) {
            let mut quantity = rng.gen_range(10..=50) as f64;
            if weekend {
                quantity = (quantity * 1.5).trunc();
            }
            // Hot days sell less.
            if rng.gen_bool(0.3) {
                quantity = (quantity * 0.8).trunc();
            }
            sales.push(Transaction {
                date,
                product: product.to_string(),
                quantity,
            });
        }

        if rng.gen_bool(0.4) {
            let count = rng.gen_range(1..=3);
            for product in PRODUCTS.choose_multiple(rng, count) {
                writeoffs.push(Transaction {
                    date,
                    product: product.to_string(),
                    quantity: rng.gen_range(1..=5) as f64,
                });
            }
        }
    }

    (sales, writeoffs)
}

/// Header row of the shop's own spreadsheet exports.
pub const SHEET_HEADERS: [&str; 3] = ["дата", "товар", "кол-во"];

/// Single-sheet workbook with date-formatted date cells.
pub fn workbook_bytes(records: &[Transaction]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let sheet = workbook.add_worksheet();

    for (col, header) in SHEET_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (i, r) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_datetime_with_format(row, 0, &r.date, &date_format)?;
        sheet.write_string(row, 1, &r.product)?;
        sheet.write_number(row, 2, r.quantity)?;
    }

    Ok(workbook.save_to_buffer()?)
}

pub fn write_xlsx(path: &Path, records: &[Transaction]) -> Result<()> {
    let bytes = workbook_bytes(records)?;
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn write_csv(path: &Path, records: &[Transaction]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(Column::ALL.iter().map(|c| c.name()))?;
    for r in records {
        writer.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.product.clone(),
            format!("{}", r.quantity),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
