//! Yahoo Finance chart-API market data provider.
//!
//! Fetches daily OHLCV history from the v8 chart endpoint. Rows with any
//! missing quote field are dropped, mirroring how the feed reports holidays
//! and partial sessions.

use crate::models::{Candle, TimeSeries};
use crate::services::market_data::MarketDataProvider;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<i64>>,
}

/// HTTP client for the Yahoo chart API.
pub struct YahooFinanceProvider {
    base_url: String,
    client: reqwest::Client,
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (used by the wiremock tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0")
                .build()
                .unwrap_or_default(),
        }
    }

    fn candles_from_chart(symbol: &str, data: ChartData) -> Result<Vec<Candle>> {
        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("no quote data for {}", symbol))?;

        let mut candles = Vec::with_capacity(data.timestamp.len());
        for (i, &ts) in data.timestamp.iter().enumerate() {
            let date = DateTime::<Utc>::from_timestamp(ts, 0)
                .ok_or_else(|| anyhow!("invalid timestamp {} for {}", ts, symbol))?
                .date_naive();

            // Drop rows with any missing field, like a dataframe dropna.
            let (Some(open), Some(high), Some(low), Some(close)) = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
            ) else {
                continue;
            };
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0) as f64;

            candles.push(Candle::new(date, open, high, low, close, volume));
        }
        Ok(candles)
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn daily_history(&self, symbol: &str, range: &str) -> Result<TimeSeries> {
        let url = format!(
            "{}/v8/finance/chart/{}?interval=1d&range={}",
            self.base_url, symbol, range
        );
        debug!(symbol = %symbol, url = %url, "fetching daily history");

        let response: ChartResponse = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request failed for {}", symbol))?
            .error_for_status()
            .with_context(|| format!("provider rejected request for {}", symbol))?
            .json()
            .await
            .with_context(|| format!("malformed chart response for {}", symbol))?;

        if let Some(error) = response.chart.error {
            bail!(
                "provider error for {}: {} ({})",
                symbol,
                error.description,
                error.code
            );
        }

        let data = response
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| anyhow!("empty chart result for {}", symbol))?;

        let candles = Self::candles_from_chart(symbol, data)?;
        Ok(TimeSeries::new(symbol, candles))
    }
}
