//! Trend indicators.

pub mod sma;

pub use sma::{crossovers, sma_series};
