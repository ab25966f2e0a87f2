//! Strategy efficiency — the share of buy days whose window closed.
//!
//! This is a crude proxy for "how often did the signal resolve", not a
//! profit-and-loss backtest: it counts window closes, with no notion of
//! entry price, exit price, sizing, or costs.

use crate::signal::SignalRow;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EfficiencyError {
    /// No buy signals in the series. Distinct from a true 0% efficiency,
    /// which needs at least one buy and zero gains.
    #[error("no buy signals in the period, efficiency is not applicable")]
    NoBuySignals,
}

/// Percentage of buy rows followed by a gain (window-close) event, truncated
/// toward zero to an integer in [0, 100].
///
/// Truncation, not rounding, matches the reference outputs. The result
/// cannot exceed 100 since a gain row is by definition a buy row.
pub fn strategy_efficiency(rows: &[SignalRow]) -> Result<u8, EfficiencyError> {
    let total_buy = rows.iter().filter(|r| r.buy).count();
    if total_buy == 0 {
        return Err(EfficiencyError::NoBuySignals);
    }
    let total_gain = rows.iter().filter(|r| r.gain == Some(true)).count();
    Ok((100 * total_gain / total_buy) as u8)
}
