//! dipscan CLI — scan a watchlist for two consecutive negative closes inside
//! a rising SMA trend.
//!
//! Ticker sources, in precedence order: positional arguments, `--tickers-csv`,
//! the `--config` TOML file, else the built-in default watchlist. Skipped
//! tickers are reported on stderr and never abort the run.

use anyhow::{bail, Context, Result};
use clap::Parser;
use dipscan_core::data::{load_ticker_csv, parse_ticker_list, YahooProvider};
use dipscan_core::{run_analysis, AnalysisConfig};
use std::path::PathBuf;

mod report;

use report::TableDepth;

#[derive(Parser)]
#[command(
    name = "dipscan",
    about = "dipscan — two consecutive negative closes in a rising SMA trend"
)]
struct Cli {
    /// Tickers to analyze (space- or comma-separated, e.g. NVDA AAPL or nvda,aapl).
    tickers: Vec<String>,

    /// CSV file of tickers; the header row must contain a 'Ticker' column.
    #[arg(long)]
    tickers_csv: Option<PathBuf>,

    /// TOML config file (window, lookback_days, tickers).
    #[arg(long)]
    config: Option<PathBuf>,

    /// SMA window in trading days (20-200).
    #[arg(long)]
    window: Option<usize>,

    /// Calendar days of history to fetch (180-3650).
    #[arg(long)]
    lookback_days: Option<i64>,

    /// Print only the last N table rows per ticker.
    #[arg(long, default_value_t = 15, conflicts_with = "full")]
    tail: usize,

    /// Print the whole table for every ticker.
    #[arg(long, default_value_t = false)]
    full: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    config.validate()?;

    let provider = YahooProvider::new().context("failed to build HTTP client")?;
    let as_of = chrono::Local::now().date_naive();

    let report = run_analysis(&provider, &config, as_of);

    for (symbol, reason) in report.skipped() {
        eprintln!("warning: skipping {symbol}: {reason}");
    }

    let depth = if cli.full {
        TableDepth::Full
    } else {
        TableDepth::Tail(cli.tail)
    };
    print!("{}", report::render_report(&report, &depth));

    if report.analyzed_count() == 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Merge the config file, flags, and ticker sources into one AnalysisConfig.
fn resolve_config(cli: &Cli) -> Result<AnalysisConfig> {
    if !cli.tickers.is_empty() && cli.tickers_csv.is_some() {
        bail!("positional tickers and --tickers-csv are mutually exclusive");
    }

    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Some(window) = cli.window {
        config.window = window;
    }
    if let Some(lookback_days) = cli.lookback_days {
        config.lookback_days = lookback_days;
    }

    if !cli.tickers.is_empty() {
        // Space-separated args and comma-separated lists both work; joining
        // with commas normalizes the two.
        config.tickers = parse_ticker_list(&cli.tickers.join(","));
    } else if let Some(path) = &cli.tickers_csv {
        config.tickers = load_ticker_csv(path)
            .with_context(|| format!("loading tickers from {}", path.display()))?;
    }

    Ok(config)
}
