use anyhow::Result;
use suite_scout::checker::BrowserChecker;
use suite_scout::config::Config;
use suite_scout::notify::EmailNotifier;
use suite_scout::{init_logging, input, runner};
use tracing::info;

const DATE_RANGES_FILE: &str = "date_ranges.txt";

/// File-mode entry point: check every range listed in `date_ranges.txt`,
/// log-and-continue on per-range failures, exit zero once the batch has
/// run. Only startup problems (missing file, missing environment) are
/// fatal.
#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("Starting hotel availability check...");

    let ranges = input::load_date_ranges(DATE_RANGES_FILE)?;
    info!("Found {} date ranges to check", ranges.len());

    let config = Config::from_env()?;
    let notifier = EmailNotifier::new(&config)?;
    let checker = BrowserChecker::new();

    runner::run_batch(&checker, &notifier, &ranges).await;

    info!("Check completed successfully");
    Ok(())
}
