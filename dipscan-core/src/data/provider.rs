//! Data provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over market-data sources (Yahoo Finance
//! in production, fixed series in tests) so the analysis loop can be
//! exercised without a network.

use crate::domain::PriceBar;
use chrono::NaiveDate;
use thiserror::Error;

/// Structured error types for data operations.
///
/// All of these are recoverable at per-ticker granularity: the analysis loop
/// reports them as a skip and moves on.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network error: {0}")]
    Network(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("no price data returned for {symbol}")]
    NoData { symbol: String },
}

/// Trait for daily price providers.
pub trait PriceProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily closes for a symbol over a date range (inclusive),
    /// ordered by ascending date.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DataError>;
}
