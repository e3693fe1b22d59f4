//! Display formatting for raw date and time strings.
//!
//! Two pure conversions, both locale-fixed to US English abbreviations:
//!
//! - [`format_date`]: `"2024-07-04"` → `"Thu, Jul 4"`
//! - [`format_time`]: `"13:05"` → `"1:05 PM"`
//!
//! Both assume well-formed input. A string that does not match the expected
//! pattern is a [`FormatError`], which the pipelines propagate to the
//! request error boundary instead of substituting a placeholder.

use chrono::NaiveDate;
use thiserror::Error;

/// A raw date or time string that does not match the expected pattern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input was not a valid `YYYY-MM-DD` calendar date.
    #[error("malformed date string: {0:?}")]
    Date(String),

    /// Input was not a valid 24-hour `HH:MM` time.
    #[error("malformed time string: {0:?}")]
    Time(String),
}

/// Converts a raw `YYYY-MM-DD` date into `"<Weekday>, <Mon> <day>"`.
///
/// Year, month, and day are parsed as integers and assembled into a real
/// calendar date, so an out-of-range component (month 13, Feb 30) is
/// rejected rather than rolled over.
///
/// # Errors
///
/// Returns [`FormatError::Date`] if the input does not parse as a valid
/// calendar date.
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    let malformed = || FormatError::Date(raw.to_string());

    let mut parts = raw.splitn(3, '-');
    let year: i32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(malformed)?;
    let month: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(malformed)?;
    let day: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(malformed)?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)?;
    Ok(date.format("%a, %b %-d").to_string())
}

/// Converts a raw 24-hour `HH:MM` time into `"<hour>:<MM> AM|PM"`.
///
/// Hours 0 and 12 both display as 12; hour >= 12 is PM. A trailing seconds
/// component (`HH:MM:SS`, as the upstream sends for local times) is
/// accepted and ignored. The minute digits are kept verbatim so
/// zero-padding survives (`"13:05"` → `"1:05 PM"`).
///
/// # Errors
///
/// Returns [`FormatError::Time`] if the hour or minute component is missing
/// or out of range.
pub fn format_time(raw: &str) -> Result<String, FormatError> {
    let malformed = || FormatError::Time(raw.to_string());

    let mut parts = raw.split(':');
    let hour: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .filter(|h| *h < 24)
        .ok_or_else(malformed)?;
    let minute = parts
        .next()
        .filter(|m| m.len() == 2 && m.parse::<u32>().is_ok_and(|v| v < 60))
        .ok_or_else(malformed)?;

    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    Ok(format!("{display_hour}:{minute} {period}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_new_years_day() {
        assert_eq!(format_date("2024-01-01").unwrap(), "Mon, Jan 1");
    }

    #[test]
    fn format_date_independence_day() {
        assert_eq!(format_date("2024-07-04").unwrap(), "Thu, Jul 4");
    }

    #[test]
    fn format_date_double_digit_day() {
        assert_eq!(format_date("2025-12-31").unwrap(), "Wed, Dec 31");
    }

    #[test]
    fn format_date_rejects_garbage() {
        assert!(matches!(format_date("not-a-date"), Err(FormatError::Date(_))));
        assert!(matches!(format_date(""), Err(FormatError::Date(_))));
        assert!(matches!(format_date("2024-07"), Err(FormatError::Date(_))));
    }

    #[test]
    fn format_date_rejects_out_of_range_components() {
        assert!(matches!(format_date("2024-13-01"), Err(FormatError::Date(_))));
        assert!(matches!(format_date("2024-02-30"), Err(FormatError::Date(_))));
    }

    #[test]
    fn format_time_midnight_is_twelve_am() {
        assert_eq!(format_time("00:00").unwrap(), "12:00 AM");
        assert_eq!(format_time("00:30").unwrap(), "12:30 AM");
    }

    #[test]
    fn format_time_noon_is_twelve_pm() {
        assert_eq!(format_time("12:00").unwrap(), "12:00 PM");
    }

    #[test]
    fn format_time_last_minute_of_day() {
        assert_eq!(format_time("23:59").unwrap(), "11:59 PM");
    }

    #[test]
    fn format_time_keeps_minute_padding() {
        assert_eq!(format_time("13:05").unwrap(), "1:05 PM");
        assert_eq!(format_time("09:05").unwrap(), "9:05 AM");
    }

    #[test]
    fn format_time_ignores_trailing_seconds() {
        assert_eq!(format_time("19:30:00").unwrap(), "7:30 PM");
    }

    #[test]
    fn format_time_rejects_garbage() {
        assert!(matches!(format_time("later"), Err(FormatError::Time(_))));
        assert!(matches!(format_time(""), Err(FormatError::Time(_))));
        assert!(matches!(format_time("19"), Err(FormatError::Time(_))));
    }

    #[test]
    fn format_time_rejects_out_of_range_components() {
        assert!(matches!(format_time("24:00"), Err(FormatError::Time(_))));
        assert!(matches!(format_time("12:60"), Err(FormatError::Time(_))));
        assert!(matches!(format_time("12:5"), Err(FormatError::Time(_))));
    }
}
