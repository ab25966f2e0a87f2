//! dipscan core — finds two consecutive negative closes inside a rising
//! simple-moving-average trend.
//!
//! The crate is a linear pipeline over daily closes:
//! - Data providers (`data`) fetch a price series per ticker
//! - The signal engine (`signal`) derives variation, streak, SMA, trend,
//!   buy, and gain columns in one forward pass
//! - The verdict (`verdict`) categorizes the most recent row
//! - The efficiency statistic (`efficiency`) reports how often a buy window
//!   closed
//! - `analysis` runs the pipeline sequentially over a watchlist, skipping
//!   failed tickers instead of aborting
//!
//! Everything outside `data` is pure, synchronous, and deterministic.

pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod efficiency;
pub mod signal;
pub mod verdict;

pub use analysis::{run_analysis, AnalysisReport, TickerAnalysis, TickerOutcome};
pub use config::AnalysisConfig;
pub use domain::PriceBar;
pub use efficiency::{strategy_efficiency, EfficiencyError};
pub use signal::{compute_signal, SignalError, SignalRow};
pub use verdict::Verdict;
