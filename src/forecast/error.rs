use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("{table} table is missing required columns: {}", .missing.join(", "))]
    Schema { table: String, missing: Vec<String> },

    #[error("{table} row {row}, column {column}: {message}")]
    Data {
        table: String,
        row: usize,
        column: String,
        message: String,
    },
}

impl ForecastError {
    pub fn is_schema(&self) -> bool {
        matches!(self, ForecastError::Schema { .. })
    }
}
