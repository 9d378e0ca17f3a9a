//! Unit tests for per-ticker fault isolation in the collection phase

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use trendscan::config::{GoldenCrossConfig, RocReportConfig};
use trendscan::core::{collect_golden_cross_data, collect_roc_data, run_roc_report};
use trendscan::indicators::{crossovers, sma_series};
use trendscan::models::{Candle, TimeSeries};
use trendscan::services::MarketDataProvider;

/// In-memory provider: symbols without fixtures fail like a network fault.
struct FixtureProvider {
    series: HashMap<String, Vec<Candle>>,
}

impl FixtureProvider {
    fn new(fixtures: Vec<(&str, Vec<Candle>)>) -> Self {
        Self {
            series: fixtures
                .into_iter()
                .map(|(symbol, candles)| (symbol.to_string(), candles))
                .collect(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for FixtureProvider {
    async fn daily_history(&self, symbol: &str, _range: &str) -> Result<TimeSeries> {
        match self.series.get(symbol) {
            Some(candles) => Ok(TimeSeries::new(symbol, candles.clone())),
            None => Err(anyhow!("connection refused for {}", symbol)),
        }
    }
}

fn daily_candles(closes: &[f64]) -> Vec<Candle> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let date = start + Duration::days(i as i64);
            Candle::new(date, close, close, close, close, 1000.0)
        })
        .collect()
}

fn roc_config(tickers: &[&str]) -> RocReportConfig {
    RocReportConfig {
        tickers: tickers.iter().map(|s| s.to_string()).collect(),
        ..RocReportConfig::default()
    }
}

fn cross_config(tickers: &[&str]) -> GoldenCrossConfig {
    GoldenCrossConfig {
        tickers: tickers.iter().map(|s| s.to_string()).collect(),
        short_period: 5,
        long_period: 20,
        ..GoldenCrossConfig::default()
    }
}

#[tokio::test]
async fn test_faulty_ticker_never_aborts_the_batch() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let provider = FixtureProvider::new(vec![
        ("GOOD.NS", daily_candles(&closes)),
        ("ALSO.NS", daily_candles(&closes)),
    ]);
    let config = roc_config(&["GOOD.NS", "DEAD.NS", "ALSO.NS"]);

    let (rows, processed) = collect_roc_data(&config, &provider).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(processed.len(), 2);
    assert_eq!(rows[0].symbol, "GOOD.NS");
    assert_eq!(rows[1].symbol, "ALSO.NS");
    assert!(rows.iter().all(|r| r.roc.is_some()));
}

#[tokio::test]
async fn test_short_history_is_skipped() {
    let provider = FixtureProvider::new(vec![
        ("SHORT.NS", daily_candles(&vec![100.0; 10])),
        ("EMPTY.NS", Vec::new()),
    ]);
    let config = roc_config(&["SHORT.NS", "EMPTY.NS"]);

    let (rows, _) = collect_roc_data(&config, &provider).await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_undefined_roc_keeps_its_row_and_never_aborts_the_run() {
    // Zero reference closes leave every ROC value undefined. The ticker has
    // no chart to draw but must still be listed in the tabular outputs, and
    // the run must complete.
    let mut closes = vec![0.0; 10];
    closes.extend((0..30).map(|i| 100.0 + i as f64));
    let provider = FixtureProvider::new(vec![("ZERO.NS", daily_candles(&closes))]);

    let mut config = roc_config(&["ZERO.NS"]);
    config.output_dir =
        std::env::temp_dir().join(format!("trendscan-zero-roc-{}", std::process::id()));

    let outcome = run_roc_report(&config, &provider).await.unwrap();
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].symbol, "ZERO.NS");
    assert!(outcome.rows[0].roc.is_none());

    let artifacts = outcome.artifacts.unwrap();
    assert!(artifacts.csv.exists());
    assert!(artifacts.spreadsheet.exists());
    assert!(artifacts.document.exists());
}

#[tokio::test]
async fn test_golden_cross_retains_only_current_crosses() {
    // UP: flat then a step up; the short SMA crosses above and stays above.
    let mut up = vec![100.0; 25];
    up.extend(vec![200.0; 5]);
    // DOWN: flat then a step down; short below long at the latest date.
    let mut down = vec![100.0; 25];
    down.extend(vec![50.0; 5]);

    let provider = FixtureProvider::new(vec![
        ("UP.NS", daily_candles(&up)),
        ("DOWN.NS", daily_candles(&down)),
        ("THIN.NS", daily_candles(&vec![100.0; 10])),
    ]);
    let config = cross_config(&["UP.NS", "DOWN.NS", "THIN.NS"]);
    let today = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();

    let (rows, retained) = collect_golden_cross_data(&config, &provider, today).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(retained.len(), 1);

    let row = &rows[0];
    assert_eq!(row.symbol, "UP.NS");
    assert!(row.sma_short > row.sma_long);

    // The reported date is the most recent strict crossover.
    let short = sma_series(&up, config.short_period);
    let long = sma_series(&up, config.long_period);
    let last_cross = *crossovers(&short, &long).last().unwrap();
    let expected_date =
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(last_cross as i64);
    assert_eq!(row.cross_date, expected_date);
    assert_eq!(row.days_since_cross, (today - expected_date).num_days());
}

#[tokio::test]
async fn test_golden_cross_empty_when_nothing_is_above() {
    let provider = FixtureProvider::new(vec![("FLAT.NS", daily_candles(&vec![100.0; 30]))]);
    let config = cross_config(&["FLAT.NS"]);
    let today = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();

    let (rows, retained) = collect_golden_cross_data(&config, &provider, today).await;
    assert!(rows.is_empty());
    assert!(retained.is_empty());
}
