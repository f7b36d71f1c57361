//! Date Parsing and Formatting Helpers.
//!
//! Built on `chrono`. Timezones are expressed as fixed offsets: `UTC`, `GMT`,
//! `Z`, `Local` (the host offset at call time) or an explicit `±HH:MM`,
//! `±HHMM`, `±HH` offset, optionally prefixed with `UTC`/`GMT`
//! (`UTC+02:00`). Formats use chrono's strftime syntax.
//!
//! # Examples
//!
//! ```
//! use toolbelt_core::date::format_date_time;
//!
//! let s = format_date_time(Some("2024-03-01 12:30:00"), Some("+02:00"), Some("%d/%m/%Y %H:%M")).unwrap();
//! assert_eq!(s, "01/03/2024 12:30");
//! ```

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

use crate::config::DateConfig;
use crate::error::DateError;

/// Default output format: ISO 8601 without fractional seconds or offset.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default timezone name.
pub const DEFAULT_TIMEZONE: &str = "UTC";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses a timezone name into a fixed offset.
///
/// # Errors
///
/// Returns [`DateError::InvalidTimezone`] for anything that is not a known
/// alias or a well-formed offset below 24 hours.
pub fn parse_timezone(name: &str) -> Result<FixedOffset, DateError> {
    let invalid = || DateError::InvalidTimezone(name.to_string());
    let trimmed = name.trim();
    let upper = trimmed.to_ascii_uppercase();

    match upper.as_str() {
        "UTC" | "GMT" | "Z" => return Ok(Utc.fix()),
        "LOCAL" => return Ok(*Local::now().offset()),
        _ => {}
    }

    let offset = upper
        .strip_prefix("UTC")
        .or_else(|| upper.strip_prefix("GMT"))
        .unwrap_or(&upper);

    let (sign, digits) = match offset.as_bytes().first() {
        Some(b'+') => (1, &offset[1..]),
        Some(b'-') => (-1, &offset[1..]),
        _ => return Err(invalid()),
    };
    if !digits.is_ascii() {
        return Err(invalid());
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits, "00"),
        4 => (&digits[..2], &digits[2..]),
        5 if digits.as_bytes()[2] == b':' => (&digits[..2], &digits[3..]),
        _ => return Err(invalid()),
    };

    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Returns `true` when [`parse_timezone`] accepts `name`.
pub fn is_valid_timezone(name: &str) -> bool {
    parse_timezone(name).is_ok()
}

/// Current instant expressed in `timezone`.
pub fn now_in(timezone: &str) -> Result<DateTime<FixedOffset>, DateError> {
    let tz = parse_timezone(timezone)?;
    Ok(Utc::now().with_timezone(&tz))
}

/// Parses `input` into an instant, interpreting naive inputs in `tz`.
///
/// Accepted inputs, in order:
/// - `"now"` or an empty string: the current instant,
/// - `@<seconds>`: a Unix timestamp,
/// - RFC 3339 (`2024-03-01T12:00:00+01:00`), which keeps its own offset
///   and is then converted into `tz`,
/// - `YYYY-MM-DD HH:MM[:SS]`, with either a space or `T` separator,
/// - `YYYY-MM-DD` (midnight).
///
/// # Errors
///
/// Returns [`DateError::Malformed`] when none of the forms match.
pub fn parse_date(input: &str, tz: &FixedOffset) -> Result<DateTime<FixedOffset>, DateError> {
    let trimmed = input.trim();
    let malformed = || DateError::Malformed { input: input.to_string() };

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("now") {
        return Ok(Utc::now().with_timezone(tz));
    }

    if let Some(seconds) = trimmed.strip_prefix('@') {
        let seconds: i64 = seconds.parse().map_err(|_| malformed())?;
        return Utc
            .timestamp_opt(seconds, 0)
            .single()
            .map(|dt| dt.with_timezone(tz))
            .ok_or_else(malformed);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(tz));
    }

    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(malformed)?;

    tz.from_local_datetime(&naive).single().ok_or_else(malformed)
}

/// Formats a date string in the given timezone and format.
///
/// Each argument falls back to its default when `None`: the current
/// instant, [`DEFAULT_TIMEZONE`] and [`DEFAULT_FORMAT`].
///
/// # Errors
///
/// - [`DateError::InvalidTimezone`] for an unknown timezone,
/// - [`DateError::Malformed`] for an unparsable date,
/// - [`DateError::InvalidFormat`] for a format with invalid directives.
pub fn format_date_time(
    date: Option<&str>,
    timezone: Option<&str>,
    format: Option<&str>,
) -> Result<String, DateError> {
    let tz = parse_timezone(timezone.unwrap_or(DEFAULT_TIMEZONE))?;
    let dt = parse_date(date.unwrap_or("now"), &tz)?;
    format_instant(&dt, format.unwrap_or(DEFAULT_FORMAT))
}

/// Formats `date` with the timezone and format from a [`DateConfig`].
pub fn format_date_time_with(config: &DateConfig, date: Option<&str>) -> Result<String, DateError> {
    format_date_time(date, Some(&config.timezone), Some(&config.format))
}

/// Formats an already parsed instant.
pub fn format_instant(dt: &DateTime<FixedOffset>, format: &str) -> Result<String, DateError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DateError::InvalidFormat(format.to_string()));
    }
    let mut out = String::new();
    write!(out, "{}", dt.format_with_items(items.into_iter()))
        .map_err(|_| DateError::InvalidFormat(format.to_string()))?;
    Ok(out)
}

/// Returns `true` when `value` parses with exactly `format`.
///
/// Date-only formats (`%Y-%m-%d`), date-time formats and formats with an
/// offset directive (`%z`) are all accepted.
///
/// # Examples
///
/// ```
/// use toolbelt_core::date::is_date;
/// assert!(is_date("2024-02-29", "%Y-%m-%d"));
/// assert!(!is_date("2023-02-29", "%Y-%m-%d"));
/// assert!(!is_date("2024-02-29", "%d/%m/%Y"));
/// ```
pub fn is_date(value: &str, format: &str) -> bool {
    DateTime::parse_from_str(value, format).is_ok()
        || NaiveDateTime::parse_from_str(value, format).is_ok()
        || NaiveDate::parse_from_str(value, format).is_ok()
}
