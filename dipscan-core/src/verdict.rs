//! Verdict — the narrative categorization of the most recent signal row.
//!
//! Three live categories (BUY, two NEUTRAL flavors) plus a fallback when no
//! row exists. The enum is the testable contract; `Display` carries the
//! human wording shown in reports.

use crate::signal::SignalRow;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessment of whether tomorrow looks like a buy day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Trend rising and both of the last two sessions closed down.
    Buy,
    /// Trend rising, but no two-day negative streak.
    NeutralNoStreak,
    /// Trend not rising (or not yet computable, which reads as "not rising").
    NeutralNoTrend,
    /// No rows to assess.
    InsufficientData,
}

impl Verdict {
    /// Categorize from the last row of an augmented series.
    ///
    /// An undefined trend cannot be called rising, so it lands in
    /// `NeutralNoTrend`. With a rising trend, only a measured streak
    /// (`Some(true)`) upgrades to `Buy`.
    pub fn for_series(rows: &[SignalRow]) -> Self {
        let Some(last) = rows.last() else {
            return Verdict::InsufficientData;
        };
        Self::for_row(last)
    }

    pub fn for_row(row: &SignalRow) -> Self {
        match (row.trend, row.two_neg_closes) {
            (Some(true), Some(true)) => Verdict::Buy,
            (Some(true), _) => Verdict::NeutralNoStreak,
            _ => Verdict::NeutralNoTrend,
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, Verdict::Buy)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Buy => write!(
                f,
                "Verdict: BUY - the trend is rising and both of the two \
                 previous sessions closed negative."
            ),
            Verdict::NeutralNoStreak => write!(
                f,
                "Verdict: NEUTRAL - the trend is rising, but there were not \
                 two consecutive negative sessions."
            ),
            Verdict::NeutralNoTrend => write!(
                f,
                "Verdict: NEUTRAL - the trend is not rising."
            ),
            Verdict::InsufficientData => {
                write!(f, "Insufficient data to produce a verdict.")
            }
        }
    }
}
