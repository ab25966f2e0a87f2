//! Yahoo Finance data provider.
//!
//! Fetches daily bars from Yahoo's v8 chart API with a blocking client and
//! keeps only the close column. Yahoo has no official API and is subject to
//! unannounced format changes; parse failures surface as
//! `DataError::ResponseFormatChanged` so the caller can warn and move on.

use super::provider::{DataError, PriceProvider};
use crate::domain::PriceBar;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
}

/// Yahoo Finance price provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Build the chart API URL for a symbol and date range.
    fn chart_url(symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        let start_ts = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let end_ts = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?period1={start_ts}&period2={end_ts}&interval=1d"
        )
    }

    /// Parse the chart API response into PriceBars.
    ///
    /// Slots where Yahoo reports a null close (half-session artifacts) are
    /// skipped rather than invented.
    fn parse_response(symbol: &str, resp: ChartResponse) -> Result<Vec<PriceBar>, DataError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    DataError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                DataError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;

        let timestamps = data
            .timestamp
            .ok_or_else(|| DataError::ResponseFormatChanged("no timestamps".into()))?;

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("quote array is empty".into()))?;

        if quote.close.len() != timestamps.len() {
            return Err(DataError::ResponseFormatChanged(format!(
                "{} timestamps but {} closes",
                timestamps.len(),
                quote.close.len()
            )));
        }

        let mut bars = Vec::with_capacity(timestamps.len());
        for (ts, close) in timestamps.into_iter().zip(quote.close) {
            let Some(close) = close else { continue };
            let date = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("bad timestamp {ts}"))
                })?
                .date_naive();
            bars.push(PriceBar::new(date, close));
        }

        if bars.is_empty() {
            return Err(DataError::NoData {
                symbol: symbol.to_string(),
            });
        }
        Ok(bars)
    }
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>, DataError> {
        let url = Self::chart_url(symbol, start, end);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(DataError::Network(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let parsed: ChartResponse = response
            .json()
            .map_err(|e| DataError::ResponseFormatChanged(e.to_string()))?;
        Self::parse_response(symbol, parsed)
    }
}
