//! Momentum indicators.

pub mod roc;

pub use roc::roc_series;
