use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A check-in/check-out pair read from input.
///
/// Both fields are valid calendar dates. Nothing requires that check-out
/// falls after check-in; a reversed pair computes a negative length of
/// stay and simply never matches anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.check_in, self.check_out)
    }
}

/// Outcome of one check-and-notify pass for a single range. Transient;
/// nothing is persisted between runs.
#[derive(Debug)]
pub struct CheckResult {
    pub available: bool,
    /// Set when the room was found but the notification could not be sent.
    pub notify_error: Option<anyhow::Error>,
}

impl CheckResult {
    pub fn notified(&self) -> bool {
        self.available && self.notify_error.is_none()
    }
}
