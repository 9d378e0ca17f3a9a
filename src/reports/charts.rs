//! Chart pages rendered with plotters into raw RGB buffers.
//!
//! Each function draws one report page at a fixed pixel size and hands the
//! buffer to the PDF assembler. Chart composition mirrors the tabular
//! outputs: the same rows, the same colors, the same two-decimal rounding.

use crate::models::{GoldenCrossRow, Group, RocRow, TimeSeries};
use crate::reports::{is_fresh_cross, roc_column_header};
use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Pixel size of every rendered page.
pub const PAGE_WIDTH: u32 = 1200;
pub const PAGE_HEIGHT: u32 = 800;

const GAINER_BAR: RGBColor = RGBColor(34, 139, 34);
const LOSER_BAR: RGBColor = RGBColor(178, 34, 34);
const GAINER_ROW_FILL: RGBColor = RGBColor(152, 251, 152);
const LOSER_ROW_FILL: RGBColor = RGBColor(240, 128, 128);
const FRESH_ROW_FILL: RGBColor = RGBColor(198, 239, 206);
const CROSS_MARKER: RGBColor = RGBColor(255, 165, 0);
const HEADER_FILL: RGBColor = RGBColor(220, 220, 220);

type DrawOutcome = std::result::Result<(), Box<dyn std::error::Error>>;

fn new_page() -> Vec<u8> {
    vec![0u8; (PAGE_WIDTH * PAGE_HEIGHT * 3) as usize]
}

/// Per-ticker ROC line chart with a zero reference line.
pub fn roc_chart_page(series: &TimeSeries, roc: &[Option<f64>], period: usize) -> Result<Vec<u8>> {
    let mut page = new_page();
    {
        let root = BitMapBackend::with_buffer(&mut page, (PAGE_WIDTH, PAGE_HEIGHT))
            .into_drawing_area();
        draw_roc_chart(&root, series, roc, period)
            .map_err(|e| anyhow!("{} ROC chart: {}", series.symbol(), e))?;
        root.present()
            .map_err(|e| anyhow!("{} ROC chart: {}", series.symbol(), e))?;
    }
    Ok(page)
}

fn draw_roc_chart(
    root: &DrawingArea<BitMapBackend, Shift>,
    series: &TimeSeries,
    roc: &[Option<f64>],
    period: usize,
) -> DrawOutcome {
    root.fill(&WHITE)?;

    let points: Vec<(f64, f64)> = roc
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
        .collect();
    if points.is_empty() {
        return Err(format!("no defined ROC values for {}", series.symbol()).into());
    }

    let dates = series.dates();
    let (y_min, y_max) = padded_bounds(points.iter().map(|&(_, v)| v), true);
    let x_max = (roc.len().saturating_sub(1)).max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("{} - {}-Day Rate of Change (ROC)", series.symbol(), period),
            ("sans-serif", 30),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|x| date_label(&dates, *x))
        .y_desc("ROC (%)")
        .x_desc("Date")
        .draw()?;

    // Zero reference line.
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, 0.0), (x_max, 0.0)],
        BLACK.stroke_width(1),
    )))?;

    chart
        .draw_series(LineSeries::new(points, BLUE.stroke_width(2)))?
        .label(roc_column_header(period))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Per-ticker close/SMA chart with vertical markers at every crossover.
pub fn golden_cross_chart_page(
    series: &TimeSeries,
    sma_short: &[Option<f64>],
    sma_long: &[Option<f64>],
    cross_indices: &[usize],
    short_period: usize,
    long_period: usize,
) -> Result<Vec<u8>> {
    let mut page = new_page();
    {
        let root = BitMapBackend::with_buffer(&mut page, (PAGE_WIDTH, PAGE_HEIGHT))
            .into_drawing_area();
        draw_golden_cross_chart(
            &root,
            series,
            sma_short,
            sma_long,
            cross_indices,
            short_period,
            long_period,
        )
        .map_err(|e| anyhow!("{} golden-cross chart: {}", series.symbol(), e))?;
        root.present()
            .map_err(|e| anyhow!("{} golden-cross chart: {}", series.symbol(), e))?;
    }
    Ok(page)
}

#[allow(clippy::too_many_arguments)]
fn draw_golden_cross_chart(
    root: &DrawingArea<BitMapBackend, Shift>,
    series: &TimeSeries,
    sma_short: &[Option<f64>],
    sma_long: &[Option<f64>],
    cross_indices: &[usize],
    short_period: usize,
    long_period: usize,
) -> DrawOutcome {
    root.fill(&WHITE)?;

    let closes = series.closes();
    if closes.is_empty() {
        return Err(format!("no price data for {}", series.symbol()).into());
    }
    let dates = series.dates();
    let (y_min, y_max) = padded_bounds(closes.iter().copied(), false);
    let x_max = (closes.len() - 1).max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("{} Golden Cross Chart", series.symbol()),
            ("sans-serif", 30),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|x| date_label(&dates, *x))
        .y_desc("Price")
        .x_desc("Date")
        .draw()?;

    for &idx in cross_indices {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(idx as f64, y_min), (idx as f64, y_max)],
            CROSS_MARKER.stroke_width(2),
        )))?;
    }

    let close_points: Vec<(f64, f64)> = closes
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();
    chart
        .draw_series(LineSeries::new(close_points, BLUE.stroke_width(2)))?
        .label("Close")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    for (values, color, label) in [
        (sma_short, GREEN, format!("SMA{}", short_period)),
        (sma_long, RED, format!("SMA{}", long_period)),
    ] {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
            .collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Gainers-vs-losers bar chart, one bar per mover, annotated with its
/// rounded value. Rows without a group tag (or a defined ROC) never reach
/// this page.
pub fn movers_bar_chart_page(movers: &[RocRow], period: usize) -> Result<Vec<u8>> {
    if movers.is_empty() {
        bail!("no movers to plot");
    }
    let mut page = new_page();
    {
        let root = BitMapBackend::with_buffer(&mut page, (PAGE_WIDTH, PAGE_HEIGHT))
            .into_drawing_area();
        draw_movers_bar_chart(&root, movers, period)
            .map_err(|e| anyhow!("movers bar chart: {}", e))?;
        root.present().map_err(|e| anyhow!("movers bar chart: {}", e))?;
    }
    Ok(page)
}

fn draw_movers_bar_chart(
    root: &DrawingArea<BitMapBackend, Shift>,
    movers: &[RocRow],
    period: usize,
) -> DrawOutcome {
    root.fill(&WHITE)?;

    let values: Vec<f64> = movers.iter().filter_map(|r| r.roc).collect();
    if values.len() != movers.len() {
        return Err("bar chart received a row without a defined ROC".into());
    }
    let (y_min, y_max) = padded_bounds(values.iter().copied(), true);
    let n = movers.len();

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!(
                "Top {} Gainers vs Top {} Losers - {}-Day ROC",
                count_group(movers, Group::Gainer),
                count_group(movers, Group::Loser),
                period
            ),
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(110)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), y_min..y_max)?;

    let symbols: Vec<String> = movers.iter().map(|r| r.symbol.clone()).collect();
    let tick_style = TextStyle::from(("sans-serif", 14).into_font())
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Center, VPos::Top));
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| symbol_label(&symbols, *x))
        .x_label_style(tick_style)
        .y_desc("ROC (%)")
        .draw()?;

    chart.draw_series(movers.iter().zip(&values).enumerate().map(|(i, (row, &v))| {
        let color = match row.group {
            Some(Group::Loser) => LOSER_BAR,
            _ => GAINER_BAR,
        };
        let x = i as f64;
        Rectangle::new([(x - 0.35, 0.0), (x + 0.35, v)], color.filled())
    }))?;

    let above = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let below = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        let style = if v >= 0.0 { above.clone() } else { below.clone() };
        Text::new(format!("{:.2}", v), (i as f64, v), style)
    }))?;
    Ok(())
}

/// Movers summary table as a colored grid, green for gainers and red for
/// losers, matching the spreadsheet's group coloring.
pub fn roc_table_page(movers: &[RocRow], period: usize) -> Result<Vec<u8>> {
    let headers = vec![
        "Ticker".to_string(),
        "Latest Close".to_string(),
        roc_column_header(period),
    ];
    let rows: Vec<(Vec<String>, RGBColor)> = movers
        .iter()
        .map(|row| {
            let fill = match row.group {
                Some(Group::Loser) => LOSER_ROW_FILL,
                _ => GAINER_ROW_FILL,
            };
            let cells = vec![
                row.symbol.clone(),
                format!("{:.2}", row.latest_close),
                row.roc.map(|v| format!("{:.2}", v)).unwrap_or_default(),
            ];
            (cells, fill)
        })
        .collect();

    table_page(
        &format!(
            "Top {} Gainers (Green) & Top {} Losers (Red) - {}-Day ROC",
            count_group(movers, Group::Gainer),
            count_group(movers, Group::Loser),
            period
        ),
        &headers,
        &rows,
    )
}

/// Golden-cross summary table as a grid, fresh crossovers highlighted with
/// the spreadsheet's fill color.
pub fn golden_cross_table_page(
    rows: &[GoldenCrossRow],
    short_period: usize,
    long_period: usize,
    recent_days: i64,
) -> Result<Vec<u8>> {
    let headers = vec![
        "Ticker".to_string(),
        "Last Price".to_string(),
        format!("SMA{}", short_period),
        format!("SMA{}", long_period),
        "Golden Cross Date".to_string(),
        "Days Since Golden Cross".to_string(),
    ];
    let table_rows: Vec<(Vec<String>, RGBColor)> = rows
        .iter()
        .map(|row| {
            let fill = if is_fresh_cross(row.days_since_cross, recent_days) {
                FRESH_ROW_FILL
            } else {
                WHITE
            };
            let cells = vec![
                row.symbol.clone(),
                format!("{:.2}", row.last_price),
                format!("{:.2}", row.sma_short),
                format!("{:.2}", row.sma_long),
                row.cross_date.to_string(),
                row.days_since_cross.to_string(),
            ];
            (cells, fill)
        })
        .collect();

    table_page(
        &format!(
            "Golden Cross Summary (crosses within {} days highlighted)",
            recent_days
        ),
        &headers,
        &table_rows,
    )
}

fn table_page(title: &str, headers: &[String], rows: &[(Vec<String>, RGBColor)]) -> Result<Vec<u8>> {
    let mut page = new_page();
    {
        let root = BitMapBackend::with_buffer(&mut page, (PAGE_WIDTH, PAGE_HEIGHT))
            .into_drawing_area();
        draw_table(&root, title, headers, rows).map_err(|e| anyhow!("table page: {}", e))?;
        root.present().map_err(|e| anyhow!("table page: {}", e))?;
    }
    Ok(page)
}

fn draw_table(
    root: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    headers: &[String],
    rows: &[(Vec<String>, RGBColor)],
) -> DrawOutcome {
    root.fill(&WHITE)?;

    let title_style = TextStyle::from(("sans-serif", 26).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        title.to_string(),
        ((PAGE_WIDTH / 2) as i32, 25),
        title_style,
    ))?;

    let cols = headers.len().max(1);
    let left = 60i32;
    let top = 80i32;
    let table_width = PAGE_WIDTH as i32 - 2 * left;
    let col_width = table_width / cols as i32;
    let row_height = ((PAGE_HEIGHT as i32 - top - 40) / (rows.len() as i32 + 1)).min(40);

    let header_style = TextStyle::from(("sans-serif", 18).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    let cell_style = TextStyle::from(("sans-serif", 16).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (c, text) in headers.iter().enumerate() {
        let x0 = left + c as i32 * col_width;
        draw_cell(root, x0, top, col_width, row_height, text, HEADER_FILL, &header_style)?;
    }

    for (r, (cells, fill)) in rows.iter().enumerate() {
        let y0 = top + (r as i32 + 1) * row_height;
        for (c, text) in cells.iter().enumerate() {
            let x0 = left + c as i32 * col_width;
            draw_cell(root, x0, y0, col_width, row_height, text, *fill, &cell_style)?;
        }
    }
    Ok(())
}

fn draw_cell(
    root: &DrawingArea<BitMapBackend, Shift>,
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
    text: &str,
    fill: RGBColor,
    style: &TextStyle,
) -> DrawOutcome {
    root.draw(&Rectangle::new(
        [(x0, y0), (x0 + width, y0 + height)],
        fill.filled(),
    ))?;
    root.draw(&Rectangle::new([(x0, y0), (x0 + width, y0 + height)], &BLACK))?;
    root.draw(&Text::new(
        text.to_string(),
        (x0 + width / 2, y0 + height / 2),
        style.clone(),
    ))?;
    Ok(())
}

fn count_group(movers: &[RocRow], group: Group) -> usize {
    movers.iter().filter(|r| r.group == Some(group)).count()
}

fn padded_bounds(values: impl Iterator<Item = f64>, include_zero: bool) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if include_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = (max - min).max(1e-6);
    (min - span * 0.08, max + span * 0.08)
}

fn date_label(dates: &[NaiveDate], x: f64) -> String {
    let idx = x.round().max(0.0) as usize;
    dates
        .get(idx.min(dates.len().saturating_sub(1)))
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

fn symbol_label(symbols: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 {
        return String::new();
    }
    symbols.get(idx as usize).cloned().unwrap_or_default()
}
