//! Small text and date helpers shared by the rendering pipeline.
//!
//! Everything here is pure and synchronous: attribute escaping, character
//! truncation, and the two date formats the site uses (the long
//! "Month D, YYYY" display form and the provider's `YYYY-MM-DD` query form).

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Escapes double quotes for embedding text in an HTML attribute.
///
/// Only `"` is rewritten; angle brackets and ampersands pass through
/// untouched, matching what the rendered cards have always done.
///
/// # Arguments
///
/// * `text` - The raw text to escape.
///
/// # Returns
///
/// The text with every `"` replaced by `&quot;`.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "&quot;")
}

/// Truncates text to at most `max` characters.
///
/// Counts `char`s rather than bytes, so multi-byte text is never split
/// mid-character. Text at or under the limit is returned unchanged.
///
/// # Arguments
///
/// * `text` - The text to truncate.
/// * `max` - Maximum number of characters to keep.
///
/// # Returns
///
/// The truncated string.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Formats a date in the site's long display form, e.g. "May 6, 2025".
///
/// # Arguments
///
/// * `date` - The date to format.
///
/// # Returns
///
/// The date as "Month D, YYYY" with no zero padding on the day.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a provider publication timestamp for display on a card.
///
/// The provider emits RFC 3339 instants (`2025-05-06T14:30:00Z`). When the
/// value parses, it is rendered in the long display form; when it does not,
/// the raw string is shown as-is rather than dropping the article.
///
/// # Arguments
///
/// * `raw` - The timestamp string as received from the provider.
///
/// # Returns
///
/// "Month D, YYYY" on success, otherwise the input unchanged.
pub fn format_publish_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => format_long_date(instant.date_naive()),
        Err(_) => raw.to_string(),
    }
}

/// The `from` date sent to the provider: `days` before `now`, as `YYYY-MM-DD`.
///
/// # Arguments
///
/// * `now` - The current instant in UTC.
/// * `days` - How far back the search window reaches.
///
/// # Returns
///
/// The window start date in the provider's query format.
pub fn lookback_date(now: DateTime<Utc>, days: i64) -> String {
    (now - Duration::days(days)).format("%Y-%m-%d").to_string()
}
