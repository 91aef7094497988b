//! Timestamp display.
//!
//! Timestamps arrive as RFC 3339 strings and are shown in the local
//! timezone as `YYYY-MM-DD HH:MM:SS`. Strings that fail to parse are
//! shown as they are.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Layout of a displayed timestamp.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats an RFC 3339 timestamp in the local timezone.
#[must_use]
pub fn format_datetime(iso: &str) -> String {
    format_datetime_in(iso, &Local)
}

/// Formats an RFC 3339 timestamp in the given timezone, falling back to
/// the input on parse failure.
#[must_use]
pub fn format_datetime_in<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(iso) {
        Ok(parsed) => parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        Err(e) => {
            if !iso.is_empty() {
                tracing::trace!(input = iso, error = %e, "unparseable timestamp, shown verbatim");
            }
            iso.to_owned()
        }
    }
}
