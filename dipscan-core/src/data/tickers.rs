//! Ticker-list sources: manual comma-separated input and CSV files.
//!
//! The CSV format matches the upload the tool has always accepted: a header
//! row containing a `Ticker` column, one symbol per record, any other
//! columns ignored.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TickerListError {
    #[error("failed to read ticker file: {0}")]
    Csv(#[from] csv::Error),

    #[error("ticker file has no 'Ticker' column in its header row")]
    MissingTickerColumn,

    #[error("no tickers found in file")]
    Empty,
}

/// The default watchlist used when the caller supplies nothing.
pub fn default_tickers() -> Vec<String> {
    ["NVDA", "AAPL", "MSFT", "CRM", "SBUX", "ZS"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Parse a comma-separated ticker list: trim, uppercase, drop empties,
/// dedupe preserving first-seen order.
pub fn parse_ticker_list(input: &str) -> Vec<String> {
    let mut tickers: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let ticker = raw.trim().to_uppercase();
        if !ticker.is_empty() && !tickers.contains(&ticker) {
            tickers.push(ticker);
        }
    }
    tickers
}

/// Load tickers from a CSV file with a `Ticker` header column.
pub fn load_ticker_csv(path: &Path) -> Result<Vec<String>, TickerListError> {
    let mut reader = csv::Reader::from_path(path)?;

    let column = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == "Ticker")
        .ok_or(TickerListError::MissingTickerColumn)?;

    let mut tickers: Vec<String> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(raw) = record.get(column) else {
            continue;
        };
        let ticker = raw.trim().to_uppercase();
        if !ticker.is_empty() && !tickers.contains(&ticker) {
            tickers.push(ticker);
        }
    }

    if tickers.is_empty() {
        return Err(TickerListError::Empty);
    }
    Ok(tickers)
}
