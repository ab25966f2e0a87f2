//! Domain types: price bars and the derived signal rows.

pub mod bar;

pub use bar::PriceBar;
