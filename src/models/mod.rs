//! Shared data models spanning the pipeline layers.

pub mod market;
pub mod summary;

pub use market::{Candle, TimeSeries};
pub use summary::{GoldenCrossRow, Group, RocRow};
