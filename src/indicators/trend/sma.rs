//! SMA (Simple Moving Average) indicator and golden-cross detection.

/// Calculate the simple moving average over a trailing window.
///
/// The result is aligned with `closes`: entries before the window is full
/// (`i < period - 1`) are `None`, the rest hold the arithmetic mean of the
/// `period` most recent closes.
pub fn sma_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; closes.len()];
    }

    let mut result = Vec::with_capacity(closes.len());
    let mut window_sum = 0.0;
    for (i, &close) in closes.iter().enumerate() {
        window_sum += close;
        if i >= period {
            window_sum -= closes[i - period];
        }
        if i + 1 >= period {
            result.push(Some(window_sum / period as f64));
        } else {
            result.push(None);
        }
    }
    result
}

/// Indices where the short SMA crosses strictly above the long SMA.
///
/// A crossover at index `t` requires both averages to be defined at `t` and
/// `t - 1`, with `short[t] > long[t]` and `short[t-1] <= long[t-1]`. Merely
/// being above the long SMA does not count.
pub fn crossovers(short: &[Option<f64>], long: &[Option<f64>]) -> Vec<usize> {
    let len = short.len().min(long.len());
    let mut indices = Vec::new();

    for t in 1..len {
        let (Some(s), Some(l)) = (short[t], long[t]) else {
            continue;
        };
        let (Some(s_prev), Some(l_prev)) = (short[t - 1], long[t - 1]) else {
            continue;
        };
        if s > l && s_prev <= l_prev {
            indices.push(t);
        }
    }
    indices
}
