use calamine::{Data, Range, Reader, Xls, Xlsx};
use csv::{ReaderBuilder, Trim};
use std::io::{Cursor, Read, Seek};

use crate::ingest::error::IngestError;
use crate::models::{excel_serial_to_datetime, Cell, RecordTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Xlsx,
    Xls,
    Csv,
}

impl SheetFormat {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = file_name.rsplit_once('.')?.1.to_lowercase();
        match ext.as_str() {
            "xlsx" => Some(SheetFormat::Xlsx),
            "xls" => Some(SheetFormat::Xls),
            "csv" => Some(SheetFormat::Csv),
            _ => None,
        }
    }
}

/// Read an uploaded file into a table named `name`, picking the parser from
/// the file extension.
pub fn read_upload(name: &str, file_name: &str, bytes: &[u8]) -> Result<RecordTable, IngestError> {
    let format = SheetFormat::from_file_name(file_name)
        .ok_or_else(|| IngestError::UnsupportedFormat(file_name.to_string()))?;
    read_table(name, format, bytes)
}

pub fn read_table(name: &str, format: SheetFormat, bytes: &[u8]) -> Result<RecordTable, IngestError> {
    match format {
        SheetFormat::Xlsx => {
            let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
                .map_err(|e| IngestError::Workbook(e.to_string()))?;
            Ok(range_to_table(name, &first_sheet(workbook)?))
        }
        SheetFormat::Xls => {
            let workbook: Xls<_> = Xls::new(Cursor::new(bytes))
                .map_err(|e| IngestError::Workbook(e.to_string()))?;
            Ok(range_to_table(name, &first_sheet(workbook)?))
        }
        SheetFormat::Csv => read_csv(name, bytes),
    }
}

fn first_sheet<RS, R>(mut workbook: R) -> Result<Range<Data>, IngestError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoWorksheet)?
        .map_err(|e| IngestError::Workbook(e.to_string()))
}

fn range_to_table(name: &str, range: &Range<Data>) -> RecordTable {
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => return RecordTable::new(name, Vec::new()),
    };

    let mut table = RecordTable::new(name, headers);
    for row in rows {
        let cells: Vec<Cell> = row.iter().map(cell_from_data).collect();
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        table.push_row(cells);
    }
    table
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::text(s.trim()),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => match excel_serial_to_datetime(dt.as_f64()) {
            Some(value) => Cell::DateTime(value),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.trim()),
        Data::Error(e) => Cell::Text(format!("#{:?}", e)),
    }
}

fn read_csv(name: &str, bytes: &[u8]) -> Result<RecordTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut table = RecordTable::new(name, headers);
    for record in reader.records() {
        let record = record?;
        let cells: Vec<Cell> = record.iter().map(Cell::text).collect();
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        table.push_row(cells);
    }
    Ok(table)
}
