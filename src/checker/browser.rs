use crate::checker::traits::AvailabilitySource;
use crate::checker::{length_of_stay, page_has_room, search_url};
use crate::models::DateRange;
use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use scraper::{Html, Selector};
use std::thread;
use std::time::Duration;
use tokio::task;
use tracing::{debug, info};

/// How long client-side scripts get to populate the room list after
/// navigation. The booking engine renders everything from JavaScript, so
/// an immediate read sees an empty shell.
const RENDER_DELAY: Duration = Duration::from_secs(5);

/// Upper bound on one launch-navigate-extract sequence.
const CHECK_TIMEOUT: Duration = Duration::from_secs(30);

/// Availability checker backed by headless Chrome.
///
/// Each check launches a fresh browser. One Chrome startup plus the fixed
/// render delay per range is the dominant cost of a run.
pub struct BrowserChecker;

impl BrowserChecker {
    pub fn new() -> Self {
        Self
    }

    /// Blocking launch-navigate-extract sequence, run on the blocking
    /// pool.
    fn fetch_page_text(url: &str) -> Result<String> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;
        let tab = browser.new_tab()?;

        tab.navigate_to(url)?;
        tab.wait_until_navigated()?;

        // No readiness signal from the booking engine; give its scripts a
        // fixed window to fill in the room cards.
        thread::sleep(RENDER_DELAY);

        let html = tab
            .evaluate("document.documentElement.outerHTML", false)?
            .value
            .and_then(|v| v.as_str().map(str::to_string))
            .context("could not get HTML from page")?;

        Ok(visible_text(&html))
    }
}

impl Default for BrowserChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse the rendered document down to the text of its body.
fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body = Selector::parse("body").unwrap();

    match document.select(&body).next() {
        Some(element) => element.text().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}

#[async_trait]
impl AvailabilitySource for BrowserChecker {
    async fn check(&self, range: DateRange) -> Result<bool> {
        info!("Checking availability using headless Chrome...");
        info!("Length of stay: {} days", length_of_stay(&range));

        let url = search_url(&range);
        info!("Checking availability at: {}", url);

        let fetch = task::spawn_blocking(move || Self::fetch_page_text(&url));
        let page_text = tokio::time::timeout(CHECK_TIMEOUT, fetch)
            .await
            .context("page load timed out")?
            .context("page load task failed")??;

        debug!(
            "Page loaded successfully, content length: {} characters",
            page_text.len()
        );

        Ok(page_has_room(&page_text))
    }
}
