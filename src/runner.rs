use crate::checker::{AvailabilitySource, ROOM_TYPE};
use crate::models::{CheckResult, DateRange};
use crate::notify::Notifier;
use anyhow::{Context, Result};
use tracing::{error, info, warn};

/// Check one range and email if the room is there.
///
/// A notification failure does not mask the availability finding: the
/// caller gets `available: true` with `notify_error` set and decides
/// whether that is fatal. A failed check is an `Err`.
pub async fn check_and_notify(
    source: &dyn AvailabilitySource,
    notifier: &dyn Notifier,
    range: DateRange,
) -> Result<CheckResult> {
    info!("Checking availability for {}", range);

    let available = source
        .check(range)
        .await
        .with_context(|| format!("failed to check availability for {range}"))?;

    if !available {
        info!("Room type '{}' not found or not available", ROOM_TYPE);
        return Ok(CheckResult {
            available: false,
            notify_error: None,
        });
    }

    info!("Found room type: {}", ROOM_TYPE);
    info!("Room is available! Sending email notification...");

    let subject = "Hotel Room Available!";
    let body = format!("Olympic Village Inn {ROOM_TYPE} is available for {range}");

    match notifier.notify(subject, &body).await {
        Ok(()) => Ok(CheckResult {
            available: true,
            notify_error: None,
        }),
        Err(e) => {
            warn!(
                "Room available for {} but failed to send email: {:#}",
                range, e
            );
            Ok(CheckResult {
                available: true,
                notify_error: Some(e),
            })
        }
    }
}

/// File-mode driver: every range gets its turn, check errors are logged
/// and skipped, and the ranges found available come back for the caller.
pub async fn run_batch(
    source: &dyn AvailabilitySource,
    notifier: &dyn Notifier,
    ranges: &[DateRange],
) -> Vec<String> {
    let mut available_ranges = Vec::new();

    for range in ranges {
        match check_and_notify(source, notifier, *range).await {
            Ok(result) if result.available => available_ranges.push(range.to_string()),
            Ok(_) => {}
            Err(e) => error!("Error checking {}: {:#}", range, e),
        }
    }

    if available_ranges.is_empty() {
        info!("No availability found for any date ranges");
    } else {
        info!(
            "Found availability for {} date range(s): {:?}",
            available_ranges.len(),
            available_ranges
        );
    }

    available_ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn range(check_in: &str, check_out: &str) -> DateRange {
        DateRange {
            check_in: check_in.parse().unwrap(),
            check_out: check_out.parse().unwrap(),
        }
    }

    struct ScriptedSource(Mutex<VecDeque<Result<bool>>>);

    impl ScriptedSource {
        fn new(outcomes: Vec<Result<bool>>) -> Self {
            Self(Mutex::new(outcomes.into()))
        }
    }

    #[async_trait]
    impl AvailabilitySource for ScriptedSource {
        async fn check(&self, _range: DateRange) -> Result<bool> {
            self.0
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected extra check")
        }
    }

    struct RecordingNotifier {
        fail: bool,
        sent: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                fail: false,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, _subject: &str, body: &str) -> Result<()> {
            if self.fail {
                bail!("relay rejected message");
            }
            self.sent.lock().unwrap().push(body.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn notifies_when_available() {
        let source = ScriptedSource::new(vec![Ok(true)]);
        let notifier = RecordingNotifier::new();

        let result = check_and_notify(&source, &notifier, range("2024-06-10", "2024-06-12"))
            .await
            .unwrap();

        assert!(result.available);
        assert!(result.notified());
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("One Bedroom Deluxe Suite"));
        assert!(sent[0].contains("2024-06-10 to 2024-06-12"));
    }

    #[tokio::test]
    async fn stays_quiet_when_not_available() {
        let source = ScriptedSource::new(vec![Ok(false)]);
        let notifier = RecordingNotifier::new();

        let result = check_and_notify(&source, &notifier, range("2024-06-10", "2024-06-12"))
            .await
            .unwrap();

        assert!(!result.available);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn notify_failure_still_reports_availability() {
        let source = ScriptedSource::new(vec![Ok(true)]);
        let notifier = RecordingNotifier::failing();

        let result = check_and_notify(&source, &notifier, range("2024-06-10", "2024-06-12"))
            .await
            .unwrap();

        assert!(result.available);
        assert!(!result.notified());
        assert!(result.notify_error.is_some());
    }

    #[tokio::test]
    async fn check_failure_is_an_error() {
        let source = ScriptedSource::new(vec![Err(anyhow::anyhow!("page load timed out"))]);
        let notifier = RecordingNotifier::new();

        let err = check_and_notify(&source, &notifier, range("2024-06-10", "2024-06-12"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("2024-06-10 to 2024-06-12"));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn batch_continues_past_check_errors() {
        let source = ScriptedSource::new(vec![
            Err(anyhow::anyhow!("page load timed out")),
            Ok(true),
            Ok(false),
        ]);
        let notifier = RecordingNotifier::new();
        let ranges = [
            range("2024-06-10", "2024-06-12"),
            range("2024-07-01", "2024-07-03"),
            range("2024-08-01", "2024-08-02"),
        ];

        let available = run_batch(&source, &notifier, &ranges).await;

        assert_eq!(available, vec!["2024-07-01 to 2024-07-03".to_string()]);
        assert_eq!(notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn batch_lists_available_even_when_notification_fails() {
        let source = ScriptedSource::new(vec![Ok(true)]);
        let notifier = RecordingNotifier::failing();

        let available =
            run_batch(&source, &notifier, &[range("2024-06-10", "2024-06-12")]).await;

        assert_eq!(available, vec!["2024-06-10 to 2024-06-12".to_string()]);
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn repeated_checks_against_same_content_agree() {
        let source = ScriptedSource::new(vec![Ok(true), Ok(true)]);
        let notifier = RecordingNotifier::new();
        let r = range("2024-06-10", "2024-06-12");

        let first = check_and_notify(&source, &notifier, r).await.unwrap();
        let second = check_and_notify(&source, &notifier, r).await.unwrap();

        assert_eq!(first.available, second.available);
    }
}
