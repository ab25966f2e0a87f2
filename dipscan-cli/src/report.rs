//! Per-ticker report rendering: verdict line, efficiency line, and a
//! markdown-style table of the augmented series.

use dipscan_core::analysis::{AnalysisReport, TickerAnalysis};
use dipscan_core::signal::SignalRow;

/// How many table rows to print.
pub enum TableDepth {
    Tail(usize),
    Full,
}

/// Render every analyzed ticker as a markdown section.
pub fn render_report(report: &AnalysisReport, depth: &TableDepth) -> String {
    let mut out = String::new();
    for analysis in report.analyzed() {
        out.push_str(&render_ticker(analysis, report.lookback_days, depth));
        out.push('\n');
    }
    out
}

fn render_ticker(analysis: &TickerAnalysis, lookback_days: i64, depth: &TableDepth) -> String {
    let mut section = format!("## {}\n\n", analysis.symbol);

    section.push_str(&analysis.verdict.to_string());
    section.push('\n');

    match analysis.efficiency {
        Ok(pct) => section.push_str(&format!(
            "Over the last {lookback_days} days, this strategy on {} worked {pct}% of the time.\n",
            analysis.symbol
        )),
        Err(_) => section.push_str("Efficiency: n/a - no buy signals in the period.\n"),
    }
    section.push('\n');

    let total = analysis.rows.len();
    let shown = match depth {
        TableDepth::Full => total,
        TableDepth::Tail(n) => total.min(*n),
    };
    if shown < total {
        section.push_str(&format!("Showing the last {shown} of {total} rows.\n\n"));
    }

    section.push_str("| Date | Close | Chg | Chg% | 2NegCl | SMA | Trend | Buy | Gain |\n");
    section.push_str("|------|-------|-----|------|--------|-----|-------|-----|------|\n");
    for row in &analysis.rows[total - shown..] {
        section.push_str(&render_row(row));
    }
    section
}

fn render_row(row: &SignalRow) -> String {
    format!(
        "| {} | {:.2} | {} | {} | {} | {} | {} | {} | {} |\n",
        row.date,
        row.close,
        fmt_num(row.variation),
        fmt_num(row.pct_variation),
        fmt_flag(row.two_neg_closes),
        fmt_num(row.sma),
        fmt_flag(row.trend),
        u8::from(row.buy),
        fmt_flag(row.gain),
    )
}

fn fmt_num(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".into(),
    }
}

fn fmt_flag(value: Option<bool>) -> String {
    match value {
        Some(flag) => u8::from(flag).to_string(),
        None => "-".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use dipscan_core::analysis::{TickerOutcome, run_analysis};
    use dipscan_core::data::provider::{DataError, PriceProvider};
    use dipscan_core::{AnalysisConfig, PriceBar};

    struct OneSeries;

    impl PriceProvider for OneSeries {
        fn name(&self) -> &str {
            "test"
        }

        fn fetch(
            &self,
            symbol: &str,
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<PriceBar>, DataError> {
            if symbol != "RISER" {
                return Err(DataError::NoData {
                    symbol: symbol.to_string(),
                });
            }
            let closes = [10.0, 11.0, 12.0, 14.0, 13.5, 13.0];
            Ok(closes
                .iter()
                .enumerate()
                .map(|(i, &c)| PriceBar::new(start + Duration::days(i as i64), c))
                .collect())
        }
    }

    fn sample_report() -> AnalysisReport {
        let config = AnalysisConfig {
            window: 3,
            lookback_days: 365,
            tickers: vec!["RISER".into(), "MISSING".into()],
        };
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        run_analysis(&OneSeries, &config, as_of)
    }

    #[test]
    fn report_has_section_verdict_and_table() {
        let report = sample_report();
        let text = render_report(&report, &TableDepth::Full);
        assert!(text.contains("## RISER"));
        assert!(text.contains("BUY"));
        assert!(text.contains("| Date | Close |"));
        // Warm-up cells render as placeholders, not zeros.
        assert!(text.contains("| 10.00 | - | - | - | - | - | 0 | 0 |"));
    }

    #[test]
    fn skipped_tickers_do_not_appear() {
        let report = sample_report();
        let text = render_report(&report, &TableDepth::Full);
        assert!(!text.contains("MISSING"));
    }

    #[test]
    fn tail_limits_rows_and_says_so() {
        let report = sample_report();
        let text = render_report(&report, &TableDepth::Tail(2));
        assert!(text.contains("Showing the last 2 of 6 rows."));
        // First data row (close 10.00) is outside the tail.
        assert!(!text.contains("| 10.00 |"));
        assert!(text.contains("| 13.00 |"));
    }

    #[test]
    fn zero_percent_efficiency_is_printed_not_na() {
        let report = sample_report();
        let analysis = match &report.outcomes[0] {
            TickerOutcome::Analyzed(a) => a,
            TickerOutcome::Skipped { .. } => panic!("expected analyzed"),
        };
        // The only buy window is still open, so this is a true 0%.
        assert_eq!(analysis.efficiency, Ok(0));
        let text = render_report(&report, &TableDepth::Full);
        assert!(text.contains("worked 0% of the time"));
        assert!(!text.contains("n/a"));
    }
}
