//! PriceBar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closing price for a single symbol on a single trading day.
///
/// Providers may see full OHLCV upstream; only the close survives into the
/// core, since every derived column is a function of closes alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }

    /// Basic sanity check: a real close is finite and positive.
    pub fn is_sane(&self) -> bool {
        self.close.is_finite() && self.close > 0.0
    }
}

/// Create a synthetic series from close prices for testing.
///
/// Dates are consecutive calendar days starting 2024-01-02; weekends are not
/// skipped since nothing in the core cares about day-of-week.
#[cfg(test)]
pub(crate) fn make_series(closes: &[f64]) -> Vec<PriceBar> {
    let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar::new(base_date + chrono::Duration::days(i as i64), close))
        .collect()
}
