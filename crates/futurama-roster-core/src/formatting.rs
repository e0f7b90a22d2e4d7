//! Formatting utilities for display
//!
//! Timestamps, elapsed times, counts, and truncation.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Parse the API's creation timestamp
///
/// Returns `None` for empty or non RFC 3339 text.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Format a creation timestamp as a date
///
/// Falls back to the raw text when it does not parse, or "-" when empty.
///
/// # Examples
///
/// ```
/// use futurama_roster_core::formatting::format_created_at;
///
/// assert_eq!(format_created_at("2023-12-31T14:01:17.617828Z"), "2023-12-31");
/// assert_eq!(format_created_at("last tuesday"), "last tuesday");
/// assert_eq!(format_created_at(""), "-");
/// ```
pub fn format_created_at(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "-".to_string();
    }
    match parse_created_at(raw) {
        Some(t) => t.format("%Y-%m-%d").to_string(),
        None => raw.to_string(),
    }
}

/// Format a duration in short human form (e.g. "45s", "3m", "2h")
pub fn format_duration_human(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86_400)
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
///
/// # Examples
///
/// ```
/// use futurama_roster_core::formatting::truncate_string;
///
/// assert_eq!(truncate_string("Hubert J. Farnsworth", 10), "Hubert ...");
/// assert_eq!(truncate_string("Fry", 10), "Fry");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format a count with singular/plural form
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
