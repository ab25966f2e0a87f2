//! Analysis orchestration — runs the fetch/compute/assess pipeline over a
//! watchlist, one ticker at a time.
//!
//! Tickers are independent: a fetch failure or a too-short series becomes a
//! `TickerOutcome::Skipped` and the loop moves on. Nothing here aborts the
//! run.

use crate::config::AnalysisConfig;
use crate::data::provider::{DataError, PriceProvider};
use crate::efficiency::{strategy_efficiency, EfficiencyError};
use crate::signal::{compute_signal, SignalError, SignalRow};
use crate::verdict::Verdict;
use chrono::{Duration, NaiveDate};
use thiserror::Error;

/// Why a ticker was skipped. Both causes are local to the ticker.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Signal(#[from] SignalError),
}

/// Completed analysis for a single ticker.
#[derive(Debug)]
pub struct TickerAnalysis {
    pub symbol: String,
    pub rows: Vec<SignalRow>,
    pub verdict: Verdict,
    pub efficiency: Result<u8, EfficiencyError>,
}

/// Per-ticker result: analyzed, or skipped with the reason.
#[derive(Debug)]
pub enum TickerOutcome {
    Analyzed(TickerAnalysis),
    Skipped { symbol: String, reason: SkipReason },
}

/// Results for a whole run, in watchlist order.
#[derive(Debug)]
pub struct AnalysisReport {
    pub outcomes: Vec<TickerOutcome>,
    pub window: usize,
    pub lookback_days: i64,
}

impl AnalysisReport {
    pub fn analyzed(&self) -> impl Iterator<Item = &TickerAnalysis> {
        self.outcomes.iter().filter_map(|o| match o {
            TickerOutcome::Analyzed(a) => Some(a),
            TickerOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes.iter().filter_map(|o| match o {
            TickerOutcome::Analyzed(_) => None,
            TickerOutcome::Skipped { symbol, reason } => Some((symbol.as_str(), reason)),
        })
    }

    pub fn analyzed_count(&self) -> usize {
        self.analyzed().count()
    }
}

/// Analyze every ticker in `config`, fetching `lookback_days` of history
/// ending at `as_of`.
pub fn run_analysis(
    provider: &dyn PriceProvider,
    config: &AnalysisConfig,
    as_of: NaiveDate,
) -> AnalysisReport {
    let start = as_of - Duration::days(config.lookback_days);
    let mut outcomes = Vec::with_capacity(config.tickers.len());

    for symbol in &config.tickers {
        outcomes.push(analyze_one(provider, symbol, start, as_of, config.window));
    }

    AnalysisReport {
        outcomes,
        window: config.window,
        lookback_days: config.lookback_days,
    }
}

fn analyze_one(
    provider: &dyn PriceProvider,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    window: usize,
) -> TickerOutcome {
    let result = provider
        .fetch(symbol, start, end)
        .map_err(SkipReason::from)
        .and_then(|series| compute_signal(&series, window).map_err(SkipReason::from));

    match result {
        Ok(rows) => {
            let verdict = Verdict::for_series(&rows);
            let efficiency = strategy_efficiency(&rows);
            TickerOutcome::Analyzed(TickerAnalysis {
                symbol: symbol.to_string(),
                rows,
                verdict,
                efficiency,
            })
        }
        Err(reason) => TickerOutcome::Skipped {
            symbol: symbol.to_string(),
            reason,
        },
    }
}
