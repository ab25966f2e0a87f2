//! Analysis configuration — the window, lookback, and watchlist.
//!
//! Loadable from a TOML file; every field has a default so a partial file
//! (or none at all) still yields a runnable config. The [20, 200] window and
//! [180, 3650] lookback ranges are a property of the user-facing surface:
//! the signal engine itself accepts any positive window that fits the
//! series.

use crate::data::tickers::default_tickers;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const WINDOW_RANGE: (usize, usize) = (20, 200);
pub const LOOKBACK_RANGE: (i64, i64) = (180, 3650);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0}")]
    InvalidValue(String),
}

/// Configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// SMA window length in trading days.
    pub window: usize,
    /// Calendar days of history to fetch, counted back from the as-of date.
    pub lookback_days: i64,
    /// Watchlist, analyzed in order.
    pub tickers: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: 50,
            lookback_days: 365,
            tickers: default_tickers(),
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Enforce the caller-facing ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (win_lo, win_hi) = WINDOW_RANGE;
        if self.window < win_lo || self.window > win_hi {
            return Err(ConfigError::InvalidValue(format!(
                "window must be in [{win_lo}, {win_hi}], got {}",
                self.window
            )));
        }
        let (lb_lo, lb_hi) = LOOKBACK_RANGE;
        if self.lookback_days < lb_lo || self.lookback_days > lb_hi {
            return Err(ConfigError::InvalidValue(format!(
                "lookback_days must be in [{lb_lo}, {lb_hi}], got {}",
                self.lookback_days
            )));
        }
        if self.tickers.is_empty() {
            return Err(ConfigError::InvalidValue(
                "at least one ticker is required".into(),
            ));
        }
        Ok(())
    }
}
