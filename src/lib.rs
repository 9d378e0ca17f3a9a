//! Batch technical-analysis reports over a fixed equity universe.
//!
//! Two report variants share the same four-step pipeline: fetch daily OHLC
//! history per ticker, run a rolling-window indicator, rank the survivors
//! into a summary table, and render that table to CSV, XLSX, and a
//! multi-page PDF.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod ranking;
pub mod reports;
pub mod services;
