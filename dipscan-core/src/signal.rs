//! Signal engine — derives the "two negative closes in a rising SMA trend"
//! columns from a series of daily closes.
//!
//! One forward pass over the series, O(1) per row: the SMA rolls a trailing
//! window sum instead of re-averaging, and the streak/trend columns only need
//! the previous row's variation and SMA.
//!
//! "Not yet computable" is `None`, never 0 or NaN. A measured
//! `two_neg_closes == Some(false)` means the streak was checked and absent;
//! `None` means there was not enough history to check. Callers that collapse
//! the two (e.g. the verdict) do so explicitly.

use crate::domain::PriceBar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the augmented series: the input bar plus derived columns.
///
/// Column definitions, for row index `t` and moving-average window `w`:
/// - `variation`: close[t] − close[t−1]. `None` at t = 0.
/// - `pct_variation`: variation as a percentage of close[t−1] (already
///   multiplied by 100). `None` where `variation` is.
/// - `two_neg_closes`: both of the two most recent variations were negative.
///   Needs variation[t] and variation[t−1], so `None` for t < 2.
/// - `sma`: mean close over the trailing `w` bars ending at t. `None` for
///   t < w − 1.
/// - `trend`: sma[t] > sma[t−1]. `None` until two SMA values exist.
/// - `buy`: trend rising AND streak active. Defined at every row; an
///   undefined input can never assert a buy.
/// - `gain`: buy[t] was active and buy[t+1] is not, i.e. the buy window
///   closed. `None` for the last row (no following day yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    pub date: NaiveDate,
    pub close: f64,
    pub variation: Option<f64>,
    pub pct_variation: Option<f64>,
    pub two_neg_closes: Option<bool>,
    pub sma: Option<f64>,
    pub trend: Option<bool>,
    pub buy: bool,
    pub gain: Option<bool>,
}

/// Structured errors for signal computation.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("moving-average window must be at least 1")]
    ZeroWindow,

    #[error("not enough data: {len} bars for a {window}-day moving average")]
    InsufficientData { len: usize, window: usize },
}

/// Compute the augmented series for `series` with an SMA window of `window`.
///
/// Every input row is retained in the output; rows inside the warm-up period
/// carry `None` in the columns that are not yet computable, so output indices
/// line up one-to-one with the input series.
///
/// Deterministic: the initial window sum is accumulated left to right and
/// then rolled forward, so identical inputs give bit-identical output.
pub fn compute_signal(series: &[PriceBar], window: usize) -> Result<Vec<SignalRow>, SignalError> {
    if window == 0 {
        return Err(SignalError::ZeroWindow);
    }
    if series.len() < window {
        return Err(SignalError::InsufficientData {
            len: series.len(),
            window,
        });
    }

    let n = series.len();
    let mut rows = Vec::with_capacity(n);

    let mut sum = 0.0;
    let mut prev_close: Option<f64> = None;
    let mut prev_variation: Option<f64> = None;
    let mut prev_sma: Option<f64> = None;

    for (t, bar) in series.iter().enumerate() {
        sum += bar.close;
        if t >= window {
            sum -= series[t - window].close;
        }
        let sma = if t + 1 >= window {
            Some(sum / window as f64)
        } else {
            None
        };

        let variation = prev_close.map(|prev| bar.close - prev);
        let pct_variation = match (variation, prev_close) {
            (Some(var), Some(prev)) => Some(var / prev * 100.0),
            _ => None,
        };
        let two_neg_closes = match (variation, prev_variation) {
            (Some(cur), Some(prev)) => Some(cur < 0.0 && prev < 0.0),
            _ => None,
        };
        let trend = match (sma, prev_sma) {
            (Some(cur), Some(prev)) => Some(cur > prev),
            _ => None,
        };
        let buy = trend == Some(true) && two_neg_closes == Some(true);

        rows.push(SignalRow {
            date: bar.date,
            close: bar.close,
            variation,
            pct_variation,
            two_neg_closes,
            sma,
            trend,
            buy,
            gain: None,
        });

        prev_close = Some(bar.close);
        prev_variation = variation;
        prev_sma = sma;
    }

    // Gain looks one row ahead, so it is backfilled after the pass. The last
    // row stays None: its buy window may still be open.
    for t in 0..n - 1 {
        rows[t].gain = Some(rows[t].buy && !rows[t + 1].buy);
    }

    Ok(rows)
}
