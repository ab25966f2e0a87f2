//! Data acquisition: market-data providers and ticker-list sources.

pub mod provider;
pub mod tickers;
pub mod yahoo;

pub use provider::{DataError, PriceProvider};
pub use tickers::{default_tickers, load_ticker_csv, parse_ticker_list, TickerListError};
pub use yahoo::YahooProvider;
