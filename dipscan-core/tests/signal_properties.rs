//! Property tests for signal-engine invariants.
//!
//! Uses proptest to verify:
//! 1. Buy implication — a buy row always has a rising trend and an active streak
//! 2. Column definedness — each derived column is defined exactly where its
//!    history requirement is met
//! 3. Idempotence — recomputing on the same inputs is bit-identical
//! 4. Efficiency bounds — undefined without buys, otherwise an integer in [0, 100]

use chrono::{Duration, NaiveDate};
use dipscan_core::efficiency::{strategy_efficiency, EfficiencyError};
use dipscan_core::signal::compute_signal;
use dipscan_core::PriceBar;
use proptest::prelude::*;

fn bars(closes: &[f64]) -> Vec<PriceBar> {
    let base = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar::new(base + Duration::days(i as i64), close))
        .collect()
}

// ── Strategies (proptest) ────────────────────────────────────────────

/// A close series plus a window no longer than the series.
fn arb_series_and_window() -> impl Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec(1.0..500.0_f64, 1..60).prop_flat_map(|closes| {
        let len = closes.len();
        (Just(closes), 1..=len)
    })
}

/// A strictly decreasing close series (every daily variation negative).
fn arb_decreasing_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01..2.0_f64, 3..40).prop_map(|drops| {
        let mut close = 1000.0;
        drops
            .into_iter()
            .map(|drop| {
                close -= drop;
                close
            })
            .collect()
    })
}

// ── 1. Buy implication ───────────────────────────────────────────────

proptest! {
    /// buy[t] can only be true when both conditions are measured true.
    #[test]
    fn buy_implies_rising_trend_and_active_streak(
        (closes, window) in arb_series_and_window(),
    ) {
        let rows = compute_signal(&bars(&closes), window).unwrap();
        for (t, row) in rows.iter().enumerate() {
            if row.buy {
                prop_assert_eq!(row.trend, Some(true), "row {}", t);
                prop_assert_eq!(row.two_neg_closes, Some(true), "row {}", t);
            }
        }
    }

    /// gain[t] can only be true on a buy row, and the last row is never
    /// evaluated (no following day exists).
    #[test]
    fn gain_only_on_buy_rows_and_never_on_last(
        (closes, window) in arb_series_and_window(),
    ) {
        let rows = compute_signal(&bars(&closes), window).unwrap();
        prop_assert!(rows.last().unwrap().gain.is_none());
        for row in &rows {
            if row.gain == Some(true) {
                prop_assert!(row.buy);
            }
        }
    }
}

// ── 2. Column definedness ────────────────────────────────────────────

proptest! {
    /// Each column is `Some` exactly from the first index with enough history.
    #[test]
    fn columns_defined_exactly_where_history_allows(
        (closes, window) in arb_series_and_window(),
    ) {
        let rows = compute_signal(&bars(&closes), window).unwrap();
        prop_assert_eq!(rows.len(), closes.len());

        for (t, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.variation.is_some(), t >= 1);
            prop_assert_eq!(row.pct_variation.is_some(), t >= 1);
            prop_assert_eq!(row.two_neg_closes.is_some(), t >= 2);
            prop_assert_eq!(row.sma.is_some(), t + 1 >= window);
            prop_assert_eq!(row.trend.is_some(), t >= window);
            prop_assert_eq!(row.gain.is_some(), t + 1 < rows.len());
        }
    }

    /// Strictly decreasing closes keep the streak measured-true everywhere
    /// it is measurable at all.
    #[test]
    fn decreasing_series_has_constant_streak(closes in arb_decreasing_series()) {
        let rows = compute_signal(&bars(&closes), 2).unwrap();
        for (t, row) in rows.iter().enumerate() {
            if t >= 2 {
                prop_assert_eq!(row.two_neg_closes, Some(true), "row {}", t);
            } else {
                prop_assert!(row.two_neg_closes.is_none());
            }
        }
    }
}

// ── 3. Idempotence ───────────────────────────────────────────────────

proptest! {
    /// Same inputs, bit-identical output, every time.
    #[test]
    fn compute_signal_is_pure((closes, window) in arb_series_and_window()) {
        let series = bars(&closes);
        let first = compute_signal(&series, window).unwrap();
        let second = compute_signal(&series, window).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── 4. Efficiency bounds ─────────────────────────────────────────────

proptest! {
    /// Efficiency is undefined without buys; with buys it is
    /// floor(100 * gains / buys), and gains never exceed buys.
    #[test]
    fn efficiency_matches_counts((closes, window) in arb_series_and_window()) {
        let rows = compute_signal(&bars(&closes), window).unwrap();
        let buys = rows.iter().filter(|r| r.buy).count();
        let gains = rows.iter().filter(|r| r.gain == Some(true)).count();
        prop_assert!(gains <= buys);

        match strategy_efficiency(&rows) {
            Err(EfficiencyError::NoBuySignals) => prop_assert_eq!(buys, 0),
            Ok(pct) => {
                prop_assert!(buys > 0);
                prop_assert!(pct <= 100);
                prop_assert_eq!(pct as usize, 100 * gains / buys);
            }
        }
    }
}
