//! Report sinks: CSV, styled XLSX, and the multi-page PDF document.
//!
//! Every sink consumes the already-sorted summary table; nothing here
//! recomputes ranks. Numeric values are rounded to two decimals uniformly
//! at this layer.

pub mod charts;
pub mod csv;
pub mod document;
pub mod spreadsheet;

pub use document::ReportDocument;

/// Column header for the ROC value, parameterized by the lookback window.
pub fn roc_column_header(period: usize) -> String {
    format!("{}-Day ROC (%)", period)
}

/// Whether a crossover this many days old gets the freshness highlight.
pub fn is_fresh_cross(days_since_cross: i64, recent_days: i64) -> bool {
    days_since_cross <= recent_days
}
