pub mod forecast;
pub mod record;
pub mod weather;

pub use forecast::{ForecastLine, ProductAggregate, Unit};
pub use record::{excel_serial_to_datetime, Cell, Column, RecordTable, Transaction};
pub use weather::{ForecastEntry, Location, WeatherSnapshot};
