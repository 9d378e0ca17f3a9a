//! SMA 50/200 golden-cross report over the liquid Nifty subset.

use anyhow::Result;
use trendscan::config::GoldenCrossConfig;
use trendscan::core::run_golden_cross_report;
use trendscan::services::YahooFinanceProvider;

#[tokio::main]
async fn main() -> Result<()> {
    trendscan::logging::init_logging();

    let config = GoldenCrossConfig::from_env();
    let provider = YahooFinanceProvider::new();
    let outcome = run_golden_cross_report(&config, &provider).await?;

    match outcome.artifacts {
        Some(artifacts) => {
            println!("CSV saved: {}", artifacts.csv.display());
            println!("Excel saved: {}", artifacts.spreadsheet.display());
            println!("PDF saved: {}", artifacts.document.display());
        }
        None => println!("No stocks above the golden cross."),
    }
    Ok(())
}
