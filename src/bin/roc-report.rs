//! Rate-of-change report over the Nifty-50 universe.

use anyhow::Result;
use trendscan::config::RocReportConfig;
use trendscan::core::run_roc_report;
use trendscan::services::YahooFinanceProvider;

#[tokio::main]
async fn main() -> Result<()> {
    trendscan::logging::init_logging();

    let config = RocReportConfig::from_env();
    let provider = YahooFinanceProvider::new();
    let outcome = run_roc_report(&config, &provider).await?;

    match outcome.artifacts {
        Some(artifacts) => {
            println!(
                "Report generated: {}, {}, {}",
                artifacts.document.display(),
                artifacts.csv.display(),
                artifacts.spreadsheet.display()
            );
        }
        None => println!("No tickers produced data; nothing was written."),
    }
    Ok(())
}
