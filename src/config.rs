//! Report configuration: ticker universes and rolling-window constants.
//!
//! Everything is fixed in code; the only runtime override is `OUTPUT_DIR`
//! (picked up from the environment or a `.env` file).

use std::env;
use std::path::PathBuf;

/// NSE-suffixed Nifty-50 constituents scanned by the ROC report.
pub const NIFTY50_TICKERS: &[&str] = &[
    "ADANIENT.NS", "ADANIPORTS.NS", "APOLLOHOSP.NS", "ASIANPAINT.NS", "AXISBANK.NS",
    "BAJAJ-AUTO.NS", "BAJFINANCE.NS", "BAJAJFINSV.NS", "BEL.NS", "BHARTIARTL.NS",
    "CIPLA.NS", "COALINDIA.NS", "DRREDDY.NS", "EICHERMOT.NS", "ETERNAL.NS",
    "GRASIM.NS", "HCLTECH.NS", "HDFCBANK.NS", "HDFCLIFE.NS", "HEROMOTOCO.NS",
    "HINDALCO.NS", "HINDUNILVR.NS", "ICICIBANK.NS", "ITC.NS", "INDUSINDBK.NS",
    "INFY.NS", "JSWSTEEL.NS", "JIOFIN.NS", "KOTAKBANK.NS", "LT.NS",
    "M&M.NS", "MARUTI.NS", "NTPC.NS", "NESTLEIND.NS", "ONGC.NS",
    "POWERGRID.NS", "RELIANCE.NS", "SBILIFE.NS", "SHRIRAMFIN.NS", "SBIN.NS",
    "SUNPHARMA.NS", "TCS.NS", "TATACONSUM.NS", "TATAMOTORS.NS", "TATASTEEL.NS",
    "TECHM.NS", "TITAN.NS", "TRENT.NS", "ULTRACEMCO.NS", "WIPRO.NS",
];

/// Liquid subset scanned by the golden-cross report.
pub const GOLDEN_CROSS_TICKERS: &[&str] = &[
    "RELIANCE.NS", "HDFCBANK.NS", "ICICIBANK.NS", "TCS.NS", "INFY.NS",
    "KOTAKBANK.NS", "HINDUNILVR.NS", "SBIN.NS", "BAJFINANCE.NS", "AXISBANK.NS",
];

const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Configuration for the rate-of-change report.
#[derive(Clone, Debug)]
pub struct RocReportConfig {
    pub tickers: Vec<String>,
    /// Lookback in trading days for the rate-of-change window.
    pub roc_period: usize,
    /// History range requested from the market-data provider.
    pub history_range: String,
    /// Rows kept per side of the gainers/losers comparison.
    pub top_n: usize,
    pub output_dir: PathBuf,
}

impl Default for RocReportConfig {
    fn default() -> Self {
        Self {
            tickers: NIFTY50_TICKERS.iter().map(|s| s.to_string()).collect(),
            roc_period: 30,
            history_range: "1y".to_string(),
            top_n: 10,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl RocReportConfig {
    /// Default config with the `OUTPUT_DIR` environment override applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.output_dir = output_dir_from_env().unwrap_or(config.output_dir);
        config
    }
}

/// Configuration for the SMA golden-cross report.
#[derive(Clone, Debug)]
pub struct GoldenCrossConfig {
    pub tickers: Vec<String>,
    pub short_period: usize,
    pub long_period: usize,
    /// Crossovers at most this many calendar days old are highlighted.
    pub recent_days: i64,
    pub history_range: String,
    pub output_dir: PathBuf,
}

impl Default for GoldenCrossConfig {
    fn default() -> Self {
        Self {
            tickers: GOLDEN_CROSS_TICKERS.iter().map(|s| s.to_string()).collect(),
            short_period: 50,
            long_period: 200,
            recent_days: 30,
            history_range: "1y".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GoldenCrossConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.output_dir = output_dir_from_env().unwrap_or(config.output_dir);
        config
    }
}

fn output_dir_from_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok();
    env::var("OUTPUT_DIR").ok().map(PathBuf::from)
}

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}
