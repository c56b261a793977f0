use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file type '{0}' (expected .xlsx, .xls or .csv)")]
    UnsupportedFormat(String),

    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}
