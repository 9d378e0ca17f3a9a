//! Daily batch entry point: runs both report variants in sequence.

use anyhow::Result;
use trendscan::config::{GoldenCrossConfig, RocReportConfig};
use trendscan::core::{run_golden_cross_report, run_roc_report};
use trendscan::services::YahooFinanceProvider;

#[tokio::main]
async fn main() -> Result<()> {
    trendscan::logging::init_logging();

    let provider = YahooFinanceProvider::new();

    let roc_config = RocReportConfig::from_env();
    let roc = run_roc_report(&roc_config, &provider).await?;
    match &roc.artifacts {
        Some(artifacts) => println!(
            "ROC report generated: {}, {}, {}",
            artifacts.document.display(),
            artifacts.csv.display(),
            artifacts.spreadsheet.display()
        ),
        None => println!("ROC report: no tickers produced data."),
    }

    let cross_config = GoldenCrossConfig::from_env();
    let cross = run_golden_cross_report(&cross_config, &provider).await?;
    match &cross.artifacts {
        Some(artifacts) => println!(
            "Golden cross report generated: {}, {}, {}",
            artifacts.document.display(),
            artifacts.csv.display(),
            artifacts.spreadsheet.display()
        ),
        None => println!("No stocks above the golden cross."),
    }

    Ok(())
}
