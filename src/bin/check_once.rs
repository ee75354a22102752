use anyhow::{bail, Result};
use suite_scout::checker::BrowserChecker;
use suite_scout::config::Config;
use suite_scout::notify::EmailNotifier;
use suite_scout::{init_logging, input, runner};
use tracing::info;

/// Argument-mode entry point: one range from two positional arguments,
/// fail-fast. Unlike the batch binary, a failed check or a failed
/// notification exits non-zero.
#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        bail!("usage: check_once <check-in> <check-out> (dates as YYYY-MM-DD)");
    }

    let range = input::parse_range(&args[0], &args[1])?;

    let config = Config::from_env()?;
    let notifier = EmailNotifier::new(&config)?;
    let checker = BrowserChecker::new();

    let result = runner::check_and_notify(&checker, &notifier, range).await?;

    if let Some(e) = result.notify_error {
        return Err(e.context(format!(
            "room available for {range} but failed to send email"
        )));
    }

    if result.available {
        info!("Room is available for {}", range);
    } else {
        info!("Room is not available for {}", range);
    }

    Ok(())
}
