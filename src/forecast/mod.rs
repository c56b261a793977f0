pub mod aggregate;
pub mod engine;
pub mod error;
pub mod parse;

pub use engine::{ForecastEngine, ForecastRules};
pub use error::ForecastError;
