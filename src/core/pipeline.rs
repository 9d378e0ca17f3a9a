//! Sequential batch pipelines for both report variants.
//!
//! Tickers are processed strictly one at a time. Each ticker's fetch and
//! indicator computation sit behind a local failure barrier: any fault is
//! logged with the symbol and the ticker is skipped, never aborting the
//! run. Only output-directory and file-writing faults are fatal.

use crate::config::{GoldenCrossConfig, RocReportConfig};
use crate::indicators::{crossovers, latest_defined, roc_series, sma_series};
use crate::models::{GoldenCrossRow, Group, RocRow, TimeSeries};
use crate::ranking::{partition_movers, sort_cross_rows, sort_roc_rows};
use crate::reports::{charts, csv, spreadsheet, ReportDocument};
use crate::services::MarketDataProvider;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Files produced by a completed report run.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub csv: PathBuf,
    pub spreadsheet: PathBuf,
    pub document: PathBuf,
}

/// Result of the ROC pipeline: the final summary table plus the artifact
/// paths (absent when no ticker survived).
pub struct RocReportOutcome {
    pub rows: Vec<RocRow>,
    pub artifacts: Option<ReportArtifacts>,
}

/// Result of the golden-cross pipeline.
pub struct GoldenCrossOutcome {
    pub rows: Vec<GoldenCrossRow>,
    pub artifacts: Option<ReportArtifacts>,
}

/// Price history plus the computed ROC series for one surviving ticker.
pub struct RocSeries {
    pub series: TimeSeries,
    pub roc: Vec<Option<f64>>,
}

/// Price history plus both SMA series for one retained ticker.
pub struct CrossSeries {
    pub series: TimeSeries,
    pub sma_short: Vec<Option<f64>>,
    pub sma_long: Vec<Option<f64>>,
    pub cross_indices: Vec<usize>,
}

/// Fetch and compute per ticker for the ROC report, skipping faults.
///
/// Rows come back in fetch order; ranking happens later so that every sink
/// sees one consistently sorted table.
pub async fn collect_roc_data(
    config: &RocReportConfig,
    provider: &dyn MarketDataProvider,
) -> (Vec<RocRow>, Vec<RocSeries>) {
    let mut rows = Vec::new();
    let mut processed = Vec::new();

    for symbol in &config.tickers {
        let series = match provider.daily_history(symbol, &config.history_range).await {
            Ok(series) => series,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "skipping {}: retrieval failed", symbol);
                continue;
            }
        };
        if series.is_empty() {
            warn!(symbol = %symbol, "skipping {}: empty dataset", symbol);
            continue;
        }
        if series.len() <= config.roc_period {
            warn!(
                symbol = %symbol,
                rows = series.len(),
                required = config.roc_period + 1,
                "skipping {}: not enough history",
                symbol
            );
            continue;
        }

        let roc = roc_series(&series.closes(), config.roc_period);
        let latest_roc = latest_defined(&roc);
        let Some(latest_close) = series.last_close() else {
            continue;
        };

        rows.push(RocRow {
            symbol: symbol.clone(),
            latest_close,
            roc: latest_roc,
            group: None,
        });
        processed.push(RocSeries { series, roc });
    }

    (rows, processed)
}

/// Run the full ROC report: collect, rank, and render every sink.
pub async fn run_roc_report(
    config: &RocReportConfig,
    provider: &dyn MarketDataProvider,
) -> Result<RocReportOutcome> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "cannot create output directory {}",
            config.output_dir.display()
        )
    })?;

    info!(tickers = config.tickers.len(), "downloading data");
    let (mut rows, processed) = collect_roc_data(config, provider).await;

    if rows.is_empty() {
        info!("no tickers produced data; skipping ROC artifacts");
        return Ok(RocReportOutcome {
            rows,
            artifacts: None,
        });
    }

    sort_roc_rows(&mut rows);
    let movers = partition_movers(&rows, config.top_n);
    let groups: HashMap<String, Group> = movers
        .iter()
        .filter_map(|r| r.group.map(|g| (r.symbol.clone(), g)))
        .collect();

    let csv_path = config.output_dir.join("nifty_roc_summary.csv");
    csv::write_roc_csv(&csv_path, &rows, config.roc_period)?;

    let xlsx_path = config.output_dir.join("nifty_roc_summary.xlsx");
    spreadsheet::write_roc_spreadsheet(&xlsx_path, &rows, config.roc_period, |symbol| {
        groups.get(symbol).copied()
    })?;

    let today = Utc::now().date_naive();
    let pdf_path = config
        .output_dir
        .join(format!("nifty_roc_report_{}.pdf", today.format("%Y-%m-%d")));
    let mut document = ReportDocument::new("Nifty ROC Report");
    for entry in &processed {
        // A ticker whose chart cannot be drawn keeps its tabular rows; only
        // its page is dropped.
        match charts::roc_chart_page(&entry.series, &entry.roc, config.roc_period) {
            Ok(page) => document.add_chart_page(page)?,
            Err(e) => {
                warn!(
                    symbol = %entry.series.symbol(),
                    error = %e,
                    "skipping chart page for {}",
                    entry.series.symbol()
                );
            }
        }
    }
    if !movers.is_empty() {
        document.add_chart_page(charts::movers_bar_chart_page(&movers, config.roc_period)?)?;
        document.add_chart_page(charts::roc_table_page(&movers, config.roc_period)?)?;
    }
    let pages = document.page_count();
    document.save(&pdf_path)?;

    info!(
        csv = %csv_path.display(),
        spreadsheet = %xlsx_path.display(),
        document = %pdf_path.display(),
        pages,
        "ROC report generated"
    );

    Ok(RocReportOutcome {
        rows,
        artifacts: Some(ReportArtifacts {
            csv: csv_path,
            spreadsheet: xlsx_path,
            document: pdf_path,
        }),
    })
}

/// Fetch and compute per ticker for the golden-cross report.
///
/// A ticker is retained only when its short SMA is strictly above the long
/// SMA at the latest date and a most recent crossover date exists; anything
/// else is dropped (a deliberate filter, not an error). `today` is the run
/// date used for the days-since computation.
pub async fn collect_golden_cross_data(
    config: &GoldenCrossConfig,
    provider: &dyn MarketDataProvider,
    today: NaiveDate,
) -> (Vec<GoldenCrossRow>, Vec<CrossSeries>) {
    let mut rows = Vec::new();
    let mut retained = Vec::new();

    for symbol in &config.tickers {
        let series = match provider.daily_history(symbol, &config.history_range).await {
            Ok(series) => series,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "skipping {}: retrieval failed", symbol);
                continue;
            }
        };
        if series.is_empty() || series.len() < config.long_period {
            warn!(
                symbol = %symbol,
                rows = series.len(),
                required = config.long_period,
                "skipping {}: not enough data",
                symbol
            );
            continue;
        }

        let closes = series.closes();
        let sma_short = sma_series(&closes, config.short_period);
        let sma_long = sma_series(&closes, config.long_period);

        let (Some(short_now), Some(long_now)) =
            (latest_defined(&sma_short), latest_defined(&sma_long))
        else {
            warn!(symbol = %symbol, "skipping {}: moving averages undefined", symbol);
            continue;
        };
        if short_now <= long_now {
            continue;
        }

        let cross_indices = crossovers(&sma_short, &sma_long);
        let Some(&last_cross) = cross_indices.last() else {
            continue;
        };
        let cross_date = series.candles()[last_cross].date;
        let days_since_cross = (today - cross_date).num_days();

        let Some(last_price) = series.last_close() else {
            continue;
        };
        rows.push(GoldenCrossRow {
            symbol: symbol.clone(),
            last_price,
            sma_short: short_now,
            sma_long: long_now,
            cross_date,
            days_since_cross,
        });
        retained.push(CrossSeries {
            series,
            sma_short,
            sma_long,
            cross_indices,
        });
    }

    (rows, retained)
}

/// Run the full golden-cross report: collect, rank, and render every sink.
pub async fn run_golden_cross_report(
    config: &GoldenCrossConfig,
    provider: &dyn MarketDataProvider,
) -> Result<GoldenCrossOutcome> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "cannot create output directory {}",
            config.output_dir.display()
        )
    })?;

    info!(tickers = config.tickers.len(), "scanning for golden crosses");
    let today = Utc::now().date_naive();
    let (mut rows, retained) = collect_golden_cross_data(config, provider, today).await;

    if rows.is_empty() {
        info!("No stocks above the golden cross.");
        return Ok(GoldenCrossOutcome {
            rows,
            artifacts: None,
        });
    }

    sort_cross_rows(&mut rows);

    let csv_path = config.output_dir.join("nifty50_golden_cross.csv");
    csv::write_golden_cross_csv(&csv_path, &rows, config.short_period, config.long_period)?;

    let xlsx_path = config.output_dir.join("nifty50_golden_cross.xlsx");
    spreadsheet::write_golden_cross_spreadsheet(
        &xlsx_path,
        &rows,
        config.short_period,
        config.long_period,
        config.recent_days,
    )?;

    let by_symbol: HashMap<&str, &CrossSeries> = retained
        .iter()
        .map(|entry| (entry.series.symbol(), entry))
        .collect();

    let pdf_path = config.output_dir.join("nifty50_golden_cross_report.pdf");
    let mut document = ReportDocument::new("Nifty50 Golden Cross Report");
    for row in &rows {
        let Some(entry) = by_symbol.get(row.symbol.as_str()) else {
            continue;
        };
        let page = charts::golden_cross_chart_page(
            &entry.series,
            &entry.sma_short,
            &entry.sma_long,
            &entry.cross_indices,
            config.short_period,
            config.long_period,
        );
        match page {
            Ok(page) => document.add_chart_page(page)?,
            Err(e) => {
                warn!(
                    symbol = %row.symbol,
                    error = %e,
                    "skipping chart page for {}",
                    row.symbol
                );
            }
        }
    }
    document.add_chart_page(charts::golden_cross_table_page(
        &rows,
        config.short_period,
        config.long_period,
        config.recent_days,
    )?)?;
    let pages = document.page_count();
    document.save(&pdf_path)?;

    info!(
        csv = %csv_path.display(),
        spreadsheet = %xlsx_path.display(),
        document = %pdf_path.display(),
        pages,
        "golden cross report generated"
    );

    Ok(GoldenCrossOutcome {
        rows,
        artifacts: Some(ReportArtifacts {
            csv: csv_path,
            spreadsheet: xlsx_path,
            document: pdf_path,
        }),
    })
}
