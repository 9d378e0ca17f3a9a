//! Market data provider interface for pluggable data sources.

use crate::models::TimeSeries;
use anyhow::Result;
use async_trait::async_trait;

/// Source of historical daily OHLC data.
///
/// Implementations make no freshness or availability guarantee per symbol;
/// callers must treat every error as a per-ticker condition, not a pipeline
/// fault.
#[async_trait]
pub trait MarketDataProvider {
    /// Fetch daily history for a symbol over a provider range such as "1y".
    async fn daily_history(&self, symbol: &str, range: &str) -> Result<TimeSeries>;
}
