pub mod error;
pub mod spreadsheet;

pub use error::IngestError;
pub use spreadsheet::{read_table, read_upload, SheetFormat};
