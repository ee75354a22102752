pub mod browser;
pub mod traits;

pub use browser::BrowserChecker;
pub use traits::AvailabilitySource;

use crate::models::DateRange;

/// The room this whole program exists to find. The booking engine renders
/// the name verbatim in its room cards, so a plain substring test is
/// enough.
pub const ROOM_TYPE: &str = "One Bedroom Deluxe Suite";

/// Room-search endpoint of the Olympic Village Inn's booking engine.
pub const BOOKING_URL: &str = "https://olympicvillageinn.book.pegsbe.com/rooms";

/// Whole days between check-in and check-out. Not validated to be
/// positive.
pub fn length_of_stay(range: &DateRange) -> i64 {
    range
        .check_out
        .signed_duration_since(range.check_in)
        .num_days()
}

/// Build the room-search URL for a range. Room and guest counts are fixed
/// to one room, one adult.
pub fn search_url(range: &DateRange) -> String {
    format!(
        "{BOOKING_URL}?CheckinDate={}&LOS={}&Rooms=1&Adults_1=1&locale=en&offerCode=",
        range.check_in,
        length_of_stay(range)
    )
}

/// Case-sensitive exact-substring availability test. Pure function of the
/// page text; no normalization of casing or whitespace.
pub fn page_has_room(page_text: &str) -> bool {
    page_text.contains(ROOM_TYPE)
}
