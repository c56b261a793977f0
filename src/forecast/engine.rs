use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::forecast::aggregate::aggregate;
use crate::forecast::error::ForecastError;
use crate::forecast::parse::{parse_transactions, ColumnMap};
use crate::models::{ForecastLine, ProductAggregate, RecordTable, Transaction, Unit};

/// Thresholds and multipliers applied to each product aggregate.
#[derive(Debug, Clone)]
pub struct ForecastRules {
    pub window_days: i64,
    /// Write-off rate above which the base forecast is uplifted.
    pub uplift_threshold: f64,
    pub uplift_factor: f64,
    /// Write-off rate above which the elevated reserve applies.
    pub reserve_threshold: f64,
    pub base_reserve_percent: u32,
    pub elevated_reserve_percent: u32,
}

impl Default for ForecastRules {
    fn default() -> Self {
        Self {
            window_days: 30,
            uplift_threshold: 0.10,
            uplift_factor: 1.20,
            reserve_threshold: 0.05,
            base_reserve_percent: 10,
            elevated_reserve_percent: 15,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    rules: ForecastRules,
}

impl ForecastEngine {
    pub fn new(rules: ForecastRules) -> Self {
        Self { rules }
    }

    /// Earliest record date still inside the trailing window (inclusive).
    pub fn window_start(&self, now: NaiveDateTime) -> NaiveDateTime {
        now - Duration::days(self.rules.window_days)
    }

    /// Full pipeline over raw uploaded tables.
    ///
    /// Both tables are schema-checked before either is parsed; any bad row
    /// fails the whole analysis.
    pub fn analyze(
        &self,
        sales: &RecordTable,
        writeoffs: &RecordTable,
        now: NaiveDateTime,
    ) -> Result<Vec<ForecastLine>, ForecastError> {
        let sales_cols = ColumnMap::resolve(sales)?;
        let writeoff_cols = ColumnMap::resolve(writeoffs)?;

        let sales = parse_transactions(sales, sales_cols)?;
        let writeoffs = parse_transactions(writeoffs, writeoff_cols)?;

        Ok(self.forecast(&sales, &writeoffs, now))
    }

    pub fn forecast(
        &self,
        sales: &[Transaction],
        writeoffs: &[Transaction],
        now: NaiveDateTime,
    ) -> Vec<ForecastLine> {
        let start = self.window_start(now);
        let in_window = |records: &[Transaction]| -> Vec<Transaction> {
            records.iter().filter(|r| r.date >= start).cloned().collect()
        };

        let recent_sales = in_window(sales);
        let recent_writeoffs = in_window(writeoffs);
        debug!(
            "Window from {}: {}/{} sales, {}/{} write-offs",
            start,
            recent_sales.len(),
            sales.len(),
            recent_writeoffs.len(),
            writeoffs.len()
        );

        aggregate(&recent_sales, &recent_writeoffs)
            .iter()
            .map(|agg| self.forecast_line(agg))
            .collect()
    }

    pub fn forecast_line(&self, agg: &ProductAggregate) -> ForecastLine {
        let rules = &self.rules;
        let rate = agg.writeoff_rate();

        let mut base = agg.mean_sales;
        if rate > rules.uplift_threshold {
            base *= rules.uplift_factor;
        }

        let reserve_percent = if rate > rules.reserve_threshold {
            rules.elevated_reserve_percent
        } else {
            rules.base_reserve_percent
        };
        let reserve = base * reserve_percent as f64 / 100.0;

        ForecastLine {
            product: agg.product.clone(),
            forecast_amount: round1(base),
            reserve_percent,
            total_amount: round1(base + reserve),
            unit: Unit::for_product(&agg.product),
            writeoff_rate_percent: round1(rate * 100.0),
        }
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
