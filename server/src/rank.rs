//! Deterministic ordering of listing drafts by start date and time.
//!
//! The sort key is [`composite_instant`]: the raw local date and time glued
//! together and tagged as UTC. Tagging a local wall-clock value as UTC can
//! misorder events across timezones; the behavior is kept deliberately (it
//! matches the service's established ordering) and is isolated here so it
//! stays unit-testable and swappable.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::extract::ListingDraft;
use crate::format::FormatError;

/// Builds the sort instant for a raw local date and time.
///
/// Equivalent to parsing `"<date>T<time>Z"`: the local values are
/// interpreted as UTC. A trailing seconds component in the time is
/// honored; a missing one reads as `:00`.
///
/// # Errors
///
/// Returns a [`FormatError`] for inputs that do not parse, so a malformed
/// record surfaces at the request error boundary instead of silently
/// landing at an arbitrary position.
pub fn composite_instant(local_date: &str, local_time: &str) -> Result<DateTime<Utc>, FormatError> {
    let date = NaiveDate::parse_from_str(local_date, "%Y-%m-%d")
        .map_err(|_| FormatError::Date(local_date.to_string()))?;
    let time = NaiveTime::parse_from_str(local_time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(local_time, "%H:%M"))
        .map_err(|_| FormatError::Time(local_time.to_string()))?;
    Ok(date.and_time(time).and_utc())
}

/// Sorts listing drafts ascending by composite start instant.
///
/// The underlying sort is stable, so drafts with equal instants keep their
/// upstream insertion order.
///
/// # Errors
///
/// Fails with the first draft whose date or time does not parse.
pub fn sort_by_start(drafts: Vec<ListingDraft>) -> Result<Vec<ListingDraft>, FormatError> {
    let mut keyed = drafts
        .into_iter()
        .map(|draft| composite_instant(&draft.local_date, &draft.local_time).map(|key| (key, draft)))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by_key(|(instant, _)| *instant);

    Ok(keyed.into_iter().map(|(_, draft)| draft).collect())
}
