use crate::models::DateRange;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tracing::warn;

/// Read and parse a date-ranges file. A missing or unreadable file is
/// fatal; malformed lines inside it are not.
pub fn load_date_ranges(path: impl AsRef<Path>) -> Result<Vec<DateRange>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read date ranges file {}", path.display()))?;
    Ok(parse_date_ranges(&text))
}

/// Parse `check-in,check-out` lines. Blank lines and `#` comments are
/// skipped silently; malformed lines are logged with their line number
/// and skipped.
pub fn parse_date_ranges(text: &str) -> Vec<DateRange> {
    let mut ranges = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 2 {
            warn!("Invalid format on line {}: {}", i + 1, line);
            continue;
        }

        match (parse_date(parts[0].trim()), parse_date(parts[1].trim())) {
            (Some(check_in), Some(check_out)) => {
                ranges.push(DateRange {
                    check_in,
                    check_out,
                });
            }
            _ => warn!("Invalid date format on line {}: {}", i + 1, line),
        }
    }

    ranges
}

/// Parse one range from two raw strings (the CLI-argument entry point,
/// where a bad date is an error rather than a skipped line).
pub fn parse_range(check_in: &str, check_out: &str) -> Result<DateRange> {
    let check_in = parse_date(check_in)
        .with_context(|| format!("invalid check-in date: {check_in}"))?;
    let check_out = parse_date(check_out)
        .with_context(|| format!("invalid check-out date: {check_out}"))?;

    Ok(DateRange {
        check_in,
        check_out,
    })
}

// Dates must be exactly YYYY-MM-DD: 10 bytes, dashes at offsets 4 and 7,
// and a real calendar date.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
