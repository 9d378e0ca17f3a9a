//! Delimited-text rendering of the summary tables.

use crate::models::{GoldenCrossRow, RocRow};
use crate::reports::roc_column_header;
use anyhow::{Context, Result};
use std::path::Path;

/// Write the ROC summary table. Rows keep the table's order; an absent ROC
/// renders as an empty field.
pub fn write_roc_csv(path: &Path, rows: &[RocRow], period: usize) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot open {} for writing", path.display()))?;

    let roc_header = roc_column_header(period);
    writer.write_record(["Ticker", "Latest Close", roc_header.as_str()])?;
    for row in rows {
        let close = format!("{:.2}", row.latest_close);
        let roc = row.roc.map(|v| format!("{:.2}", v)).unwrap_or_default();
        writer.write_record([row.symbol.as_str(), close.as_str(), roc.as_str()])?;
    }
    writer
        .flush()
        .with_context(|| format!("cannot flush {}", path.display()))?;
    Ok(())
}

/// Write the golden-cross summary table, ordered by freshness.
pub fn write_golden_cross_csv(
    path: &Path,
    rows: &[GoldenCrossRow],
    short_period: usize,
    long_period: usize,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot open {} for writing", path.display()))?;

    let short_header = format!("SMA{}", short_period);
    let long_header = format!("SMA{}", long_period);
    writer.write_record([
        "Ticker",
        "Last Price",
        short_header.as_str(),
        long_header.as_str(),
        "Golden Cross Date",
        "Days Since Golden Cross",
    ])?;
    for row in rows {
        let fields = [
            row.symbol.clone(),
            format!("{:.2}", row.last_price),
            format!("{:.2}", row.sma_short),
            format!("{:.2}", row.sma_long),
            row.cross_date.to_string(),
            row.days_since_cross.to_string(),
        ];
        writer.write_record(&fields)?;
    }
    writer
        .flush()
        .with_context(|| format!("cannot flush {}", path.display()))?;
    Ok(())
}
