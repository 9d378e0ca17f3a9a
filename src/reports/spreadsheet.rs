//! Styled XLSX rendering of the summary tables.
//!
//! Rows mirror the CSV output exactly; styling is additive. A failed
//! styled write is downgraded to a warning and the value is written
//! unstyled, so a styling fault never costs the data.

use crate::models::{GoldenCrossRow, Group, RocRow};
use crate::reports::{is_fresh_cross, roc_column_header};
use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use std::path::Path;
use tracing::warn;

/// openpyxl-style "good" green used for fresh crossovers.
const FRESH_CROSS_FILL: Color = Color::RGB(0xC6EFCE);
const GAINER_FILL: Color = Color::RGB(0x98FB98);
const LOSER_FILL: Color = Color::RGB(0xF08080);

/// Write the ROC summary worksheet, coloring gainer/loser rows by group.
pub fn write_roc_spreadsheet(
    path: &Path,
    rows: &[RocRow],
    period: usize,
    group_of: impl Fn(&str) -> Option<Group>,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("ROC")?;

    let header = Format::new().set_bold();
    worksheet.write_string_with_format(0, 0, "Ticker", &header)?;
    worksheet.write_string_with_format(0, 1, "Latest Close", &header)?;
    worksheet.write_string_with_format(0, 2, &roc_column_header(period), &header)?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let fill = group_of(&row.symbol).map(|group| match group {
            Group::Gainer => GAINER_FILL,
            Group::Loser => LOSER_FILL,
        });
        let text = cell_format(fill, false);
        let number = cell_format(fill, true);

        write_string(worksheet, r, 0, &row.symbol, &text);
        write_number(worksheet, r, 1, row.latest_close, &number);
        if let Some(roc) = row.roc {
            write_number(worksheet, r, 2, roc, &number);
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("cannot save spreadsheet {}", path.display()))?;
    Ok(())
}

/// Write the golden-cross worksheet, highlighting rows whose crossover is
/// at most `recent_days` old.
pub fn write_golden_cross_spreadsheet(
    path: &Path,
    rows: &[GoldenCrossRow],
    short_period: usize,
    long_period: usize,
    recent_days: i64,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("GoldenCross")?;

    let header = Format::new().set_bold();
    let headers = [
        "Ticker".to_string(),
        "Last Price".to_string(),
        format!("SMA{}", short_period),
        format!("SMA{}", long_period),
        "Golden Cross Date".to_string(),
        "Days Since Golden Cross".to_string(),
    ];
    for (c, title) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, c as u16, title, &header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let fill = is_fresh_cross(row.days_since_cross, recent_days).then_some(FRESH_CROSS_FILL);
        let text = cell_format(fill, false);
        let number = cell_format(fill, true);
        let plain = cell_format(fill, false);

        write_string(worksheet, r, 0, &row.symbol, &text);
        write_number(worksheet, r, 1, row.last_price, &number);
        write_number(worksheet, r, 2, row.sma_short, &number);
        write_number(worksheet, r, 3, row.sma_long, &number);
        write_string(worksheet, r, 4, &row.cross_date.to_string(), &text);
        write_number(worksheet, r, 5, row.days_since_cross as f64, &plain);
    }

    workbook
        .save(path)
        .with_context(|| format!("cannot save spreadsheet {}", path.display()))?;
    Ok(())
}

fn cell_format(fill: Option<Color>, two_decimals: bool) -> Format {
    let mut format = Format::new();
    if two_decimals {
        format = format.set_num_format("0.00");
    }
    if let Some(color) = fill {
        format = format.set_background_color(color);
    }
    format
}

fn write_string(worksheet: &mut Worksheet, row: u32, col: u16, value: &str, format: &Format) {
    if let Err(e) = worksheet.write_string_with_format(row, col, value, format) {
        warn!(row, col, error = %e, "styled write failed, writing plain value");
        let _ = worksheet.write_string(row, col, value);
    }
}

fn write_number(worksheet: &mut Worksheet, row: u32, col: u16, value: f64, format: &Format) {
    if let Err(e) = worksheet.write_number_with_format(row, col, value, format) {
        warn!(row, col, error = %e, "styled write failed, writing plain value");
        let _ = worksheet.write_number(row, col, value);
    }
}
