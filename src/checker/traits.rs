use crate::models::DateRange;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for availability sources. Lets the driver policy be
/// exercised without a live browser.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Check whether the room of interest is available for the range.
    async fn check(&self, range: DateRange) -> Result<bool>;
}
