//! ROC (Rate of Change) indicator
//!
//! ROC measures the percentage change of a close relative to the close
//! `period` trading days earlier:
//!
//!   ROC[t] = (close[t] / close[t - period] - 1) * 100

/// Calculate the rate of change over `period` days for each close.
///
/// The result is aligned with `closes`: entries whose lookback predates the
/// start of the series are `None`, as is any entry whose reference close is
/// zero.
pub fn roc_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; closes.len()];
    }

    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            if i < period {
                return None;
            }
            let reference = closes[i - period];
            if reference == 0.0 {
                None
            } else {
                Some((close / reference - 1.0) * 100.0)
            }
        })
        .collect()
}
