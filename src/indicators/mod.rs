//! Pure rolling-window indicator computations.
//!
//! Every function is total over its inputs: entries where the window is not
//! yet full (or a divisor is zero) come back as `None` instead of failing,
//! and the output vector is always aligned index-for-index with the input
//! closes.

pub mod momentum;
pub mod trend;

pub use momentum::roc_series;
pub use trend::{crossovers, sma_series};

/// Last defined value of an aligned indicator series, scanning from the end.
///
/// Rolling windows can leave trailing entries undefined, so "the latest
/// value" is never assumed to be the final element.
pub fn latest_defined(series: &[Option<f64>]) -> Option<f64> {
    series.iter().rev().find_map(|v| *v)
}
