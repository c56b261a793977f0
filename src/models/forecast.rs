use serde::{Deserialize, Serialize};
use std::fmt;

/// How a product is counted when ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    /// Weight-based if the product name mentions kilograms, otherwise pieces.
    pub fn for_product(product: &str) -> Self {
        let name = product.to_lowercase();
        if name.contains("kg") || name.contains("кг") {
            Unit::Kilogram
        } else {
            Unit::Piece
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Piece => "pcs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-product totals over the analysis window.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAggregate {
    pub product: String,
    pub total_sales: f64,
    pub mean_sales: f64,
    pub sales_count: usize,
    pub total_writeoffs: f64,
    pub mean_writeoffs: f64,
}

impl ProductAggregate {
    pub fn writeoff_rate(&self) -> f64 {
        if self.total_sales > 0.0 {
            self.total_writeoffs / self.total_sales
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastLine {
    pub product: String,
    pub forecast_amount: f64,
    pub reserve_percent: u32,
    pub total_amount: f64,
    pub unit: Unit,
    #[serde(rename = "writeoff_rate")]
    pub writeoff_rate_percent: f64,
}
