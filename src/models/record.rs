use chrono::{Duration, NaiveDate, NaiveDateTime};

/// A single spreadsheet cell, reduced to the shapes the engine cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// Convert an Excel serial day number (1900 date system) to a date-time.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    // Serial 0 is 1899-12-30 once Excel's phantom 1900-02-29 is accounted for.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = serial.trunc() as i64;
    let seconds = ((serial - serial.trunc()) * 86_400.0).round() as i64;
    epoch.checked_add_signed(Duration::days(days) + Duration::seconds(seconds))
}

/// The three semantic columns every input table must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Product,
    Quantity,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Date, Column::Product, Column::Quantity];

    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Product => "product",
            Column::Quantity => "quantity",
        }
    }

    /// Header spellings accepted for this column, compared case-insensitively.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::Date => &["date", "дата"],
            Column::Product => &["product", "товар"],
            Column::Quantity => &["quantity", "qty", "кол-во", "количество"],
        }
    }

    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        self.aliases().iter().any(|a| *a == header)
    }
}

/// Header plus raw rows as read from one uploaded sheet.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    pub name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl RecordTable {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: Column) -> Option<usize> {
        self.columns.iter().position(|h| column.matches(h))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDateTime,
    pub product: String,
    pub quantity: f64,
}
