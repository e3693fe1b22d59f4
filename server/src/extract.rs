//! Field extraction over raw upstream events.
//!
//! Every accessor here is an explicit fallback chain over `Option`: a broken
//! access path (missing `dates`, missing `_embedded`, empty `venues`) reads
//! as "field absent" and never raises. "Missing" stays distinct from zero
//! and from the empty string, so a free event (price 0) still resolves a
//! price.
//!
//! [`listing`] doubles as the completeness gate for list responses: it
//! returns `None` unless every listing-mandatory field resolves, and such
//! records are silently dropped by the pipeline, never repaired.

use crate::types::{EventDetail, RawEvent, RawVenue};

/// Marker token identifying the image variant used on detail pages.
const DETAIL_IMAGE_MARKER: &str = "ARTIST_PAGE";

/// A listing-eligible event with its raw, machine-sortable date and time.
///
/// Drafts carry the unformatted `local_date`/`local_time` because the
/// ranker sorts on those; display formatting happens after sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub name: String,
    pub id: String,
    /// Raw local date, `YYYY-MM-DD`.
    pub local_date: String,
    /// Raw local 24-hour time.
    pub local_time: String,
    pub date_time_utc: String,
    pub price_min: String,
    pub price_max: String,
    pub location: String,
    pub venue: String,
}

/// Extracts the listing field set from a raw event, or `None` if the record
/// is incomplete.
///
/// A record is listing-eligible only when all of the following resolve:
/// name, id, local start date, local start time, UTC start datetime, a
/// first price range with min, max, and currency, and a first venue with a
/// name, a city, and a state.
pub fn listing(raw: &RawEvent) -> Option<ListingDraft> {
    let start = raw.dates.as_ref()?.start.as_ref()?;
    let (price_min, price_max) = listing_prices(raw)?;
    let venue = first_venue(raw)?;

    Some(ListingDraft {
        name: raw.name.clone()?,
        id: raw.id.clone()?,
        local_date: start.local_date.clone()?,
        local_time: start.local_time.clone()?,
        date_time_utc: start.date_time.clone()?,
        price_min,
        price_max,
        location: location(raw)?,
        venue: venue.name.clone()?,
    })
}

/// Extracts the full detail field set from a raw event.
///
/// No completeness gate applies: unresolved fields come back as `None`.
/// The `date` and `time` fields are left in their raw form; the detail
/// pipeline formats them for display.
pub fn detail(raw: &RawEvent) -> EventDetail {
    let start = raw.dates.as_ref().and_then(|d| d.start.as_ref());
    let (price_min, price_max) = detail_prices(raw);

    EventDetail {
        name: raw.name.clone(),
        date: start.and_then(|s| s.local_date.clone()),
        time: start.and_then(|s| s.local_time.clone()),
        price_min,
        price_max,
        info: info_text(raw),
        image: detail_image(raw),
        seatmap: raw.seatmap.as_ref().and_then(|s| s.static_url.clone()),
        location: location(raw),
        venue: first_venue(raw).and_then(|v| v.name.clone()),
        address: address(raw),
        url: raw.url.clone(),
    }
}

/// First venue of the event, if any.
fn first_venue(raw: &RawEvent) -> Option<&RawVenue> {
    raw.embedded.as_ref()?.venues.first()
}

/// `"City, StateCodeOrName"` from the first venue.
///
/// Requires both a city name and a state identifier; the two-letter state
/// code wins over the full state name. A partially resolvable location is
/// absent, never half-filled.
fn location(raw: &RawEvent) -> Option<String> {
    let venue = first_venue(raw)?;
    let city = venue.city.as_ref()?.name.as_deref()?;
    let state = venue.state.as_ref()?;
    let state_id = state.state_code.as_deref().or(state.name.as_deref())?;
    Some(format!("{city}, {state_id}"))
}

/// `"line1, postalCode"` from the first venue; absent unless both parts
/// resolve.
fn address(raw: &RawEvent) -> Option<String> {
    let venue = first_venue(raw)?;
    let line1 = venue.address.as_ref()?.line1.as_deref()?;
    let postal_code = venue.postal_code.as_deref()?;
    Some(format!("{line1}, {postal_code}"))
}

/// Trimmed info text, falling back to the trimmed description.
///
/// Text that is empty after trimming counts as absent and falls through.
fn info_text(raw: &RawEvent) -> Option<String> {
    non_empty_trimmed(raw.info.as_deref()).or_else(|| non_empty_trimmed(raw.description.as_deref()))
}

fn non_empty_trimmed(text: Option<&str>) -> Option<String> {
    let trimmed = text?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// URL of the first image carrying the detail-page variant marker.
///
/// There is no fallback to other image sizes: an event whose image list
/// lacks the marker has no detail image.
fn detail_image(raw: &RawEvent) -> Option<String> {
    raw.images
        .iter()
        .filter_map(|image| image.url.as_deref())
        .find(|url| url.contains(DETAIL_IMAGE_MARKER))
        .map(str::to_string)
}

/// List-form price strings: `"{min} {currency}"` / `"{max} {currency}"`
/// from the first price range. Absent unless min, max, and currency all
/// resolve.
fn listing_prices(raw: &RawEvent) -> Option<(String, String)> {
    let range = raw.price_ranges.first()?;
    let currency = range.currency.as_deref()?;
    let min = range.min?;
    let max = range.max?;
    Some((format!("{min} {currency}"), format!("{max} {currency}")))
}

/// Detail-form price strings: `"$"` plus two decimals, per bound.
///
/// Min and max resolve independently, and a price of zero is a real price,
/// not a missing one.
fn detail_prices(raw: &RawEvent) -> (Option<String>, Option<String>) {
    let range = raw.price_ranges.first();
    let min = range.and_then(|r| r.min).map(|v| format!("${v:.2}"));
    let max = range.and_then(|r| r.max).map(|v| format!("${v:.2}"));
    (min, max)
}
