//! Summary rows assembled by the ranking layer and consumed by every sink.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Side of the gainers/losers comparison a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Group {
    Gainer,
    Loser,
}

/// One ticker's line in the rate-of-change report.
///
/// `roc` is absent when no lookback in the fetched history produced a
/// defined value; such rows are still listed in the tabular outputs but
/// never plotted or ranked against defined values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocRow {
    pub symbol: String,
    pub latest_close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
}

/// One ticker's line in the golden-cross report.
///
/// Rows only exist for tickers whose short SMA is currently strictly above
/// the long SMA and whose most recent crossover date is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenCrossRow {
    pub symbol: String,
    pub last_price: f64,
    pub sma_short: f64,
    pub sma_long: f64,
    pub cross_date: NaiveDate,
    pub days_since_cross: i64,
}
