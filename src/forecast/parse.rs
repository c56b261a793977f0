use chrono::{NaiveDate, NaiveDateTime};

use crate::forecast::error::ForecastError;
use crate::models::{excel_serial_to_datetime, Cell, Column, RecordTable, Transaction};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    // Dotted dates are day-first.
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Column positions of the required fields within one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub product: usize,
    pub quantity: usize,
}

impl ColumnMap {
    pub fn resolve(table: &RecordTable) -> Result<Self, ForecastError> {
        let found: Vec<(Column, Option<usize>)> = Column::ALL
            .iter()
            .map(|&c| (c, table.column_index(c)))
            .collect();

        let missing: Vec<String> = found
            .iter()
            .filter(|(_, idx)| idx.is_none())
            .map(|(c, _)| c.name().to_string())
            .collect();

        match (found[0].1, found[1].1, found[2].1) {
            (Some(date), Some(product), Some(quantity)) => Ok(Self {
                date,
                product,
                quantity,
            }),
            _ => Err(ForecastError::Schema {
                table: table.name.clone(),
                missing,
            }),
        }
    }
}

/// Parse every row of `table`. The first bad cell aborts the whole table.
pub fn parse_transactions(
    table: &RecordTable,
    columns: ColumnMap,
) -> Result<Vec<Transaction>, ForecastError> {
    let empty = Cell::Empty;
    let mut out = Vec::with_capacity(table.len());

    for (idx, row) in table.rows().iter().enumerate() {
        // Header occupies spreadsheet row 1.
        let row_no = idx + 2;
        let cell = |i: usize| row.get(i).unwrap_or(&empty);
        let fail = |column: Column, message: String| ForecastError::Data {
            table: table.name.clone(),
            row: row_no,
            column: column.name().to_string(),
            message,
        };

        let date = parse_date(cell(columns.date)).map_err(|m| fail(Column::Date, m))?;
        let product =
            parse_product(cell(columns.product)).map_err(|m| fail(Column::Product, m))?;
        let quantity =
            parse_quantity(cell(columns.quantity)).map_err(|m| fail(Column::Quantity, m))?;

        out.push(Transaction {
            date,
            product,
            quantity,
        });
    }

    Ok(out)
}

pub fn parse_date(cell: &Cell) -> Result<NaiveDateTime, String> {
    match cell {
        Cell::DateTime(dt) => Ok(*dt),
        Cell::Number(serial) => excel_serial_to_datetime(*serial)
            .ok_or_else(|| format!("date serial {} is out of range", serial)),
        Cell::Text(s) => parse_date_text(s.trim()),
        Cell::Empty => Err("date is empty".to_string()),
    }
}

fn parse_date_text(s: &str) -> Result<NaiveDateTime, String> {
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d.and_time(chrono::NaiveTime::MIN));
        }
    }
    Err(format!("unrecognised date '{}'", s))
}

fn parse_product(cell: &Cell) -> Result<String, String> {
    match cell {
        Cell::Text(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Cell::Number(n) if n.fract() == 0.0 => Ok(format!("{}", *n as i64)),
        Cell::Number(n) => Ok(n.to_string()),
        Cell::DateTime(_) => Err("product name is a date".to_string()),
        _ => Err("product name is empty".to_string()),
    }
}

pub fn parse_quantity(cell: &Cell) -> Result<f64, String> {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => {
            let s = s.trim();
            // Decimal comma is common in the source spreadsheets.
            s.replace(',', ".")
                .parse::<f64>()
                .map_err(|_| format!("quantity '{}' is not a number", s))?
        }
        Cell::DateTime(_) => return Err("quantity is a date".to_string()),
        Cell::Empty => return Err("quantity is empty".to_string()),
    };

    if !value.is_finite() {
        return Err(format!("quantity {} is not finite", value));
    }
    if value < 0.0 {
        return Err(format!("quantity {} is negative", value));
    }
    Ok(value)
}
