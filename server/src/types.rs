//! Data model for the Encore server.
//!
//! Two families of types live here:
//!
//! - **Raw upstream types** ([`RawEvent`] and friends): a tolerant mirror of
//!   the subset of the event-discovery provider's schema the pipelines
//!   consume. Every level of nesting is optional so that a sparse or broken
//!   record deserializes cleanly instead of failing the whole response.
//! - **Response shapes** ([`ListedEvent`], [`EventListResponse`],
//!   [`EventDetail`]): the normalized, display-ready records returned to
//!   clients. Wire names are camelCase.

use serde::{Deserialize, Serialize};

// ============================================================================
// Raw upstream types
// ============================================================================

/// Envelope returned by the upstream search endpoint.
///
/// The provider nests the result list under `_embedded.events`. A response
/// without the envelope is treated as an upstream failure by the client,
/// not silently mapped to an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "_embedded")]
    pub embedded: Option<SearchEmbedded>,
}

/// Inner `_embedded` object of a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEmbedded {
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

/// One unmodified event record from the upstream provider.
///
/// Only the fields the normalization pipelines read are declared; everything
/// else in the upstream payload is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub name: Option<String>,
    pub id: Option<String>,
    pub url: Option<String>,
    pub info: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    pub seatmap: Option<RawSeatmap>,
    pub dates: Option<RawDates>,
    #[serde(default)]
    pub price_ranges: Vec<RawPriceRange>,
    #[serde(rename = "_embedded")]
    pub embedded: Option<RawEventEmbedded>,
}

/// Date information block of a raw event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDates {
    pub start: Option<RawStart>,
}

/// Start instant of a raw event, in the venue's local calendar plus UTC.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStart {
    /// Local calendar date, `YYYY-MM-DD`.
    pub local_date: Option<String>,
    /// Local wall-clock time, `HH:MM:SS` (24-hour).
    pub local_time: Option<String>,
    /// ISO 8601 UTC datetime.
    pub date_time: Option<String>,
}

/// One entry of a raw event's price-range list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: Option<String>,
}

/// One entry of a raw event's image list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImage {
    pub url: Option<String>,
}

/// Seat map block of a raw event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeatmap {
    pub static_url: Option<String>,
}

/// Inner `_embedded` object of a raw event, carrying its venues.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEventEmbedded {
    #[serde(default)]
    pub venues: Vec<RawVenue>,
}

/// One venue attached to a raw event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVenue {
    pub name: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<RawCity>,
    pub state: Option<RawState>,
    pub address: Option<RawAddress>,
}

/// City block of a raw venue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCity {
    pub name: Option<String>,
}

/// State block of a raw venue.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawState {
    pub name: Option<String>,
    pub state_code: Option<String>,
}

/// Address block of a raw venue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddress {
    pub line1: Option<String>,
}

// ============================================================================
// Response shapes
// ============================================================================

/// A normalized event in a list response.
///
/// Every field is guaranteed present: records that cannot satisfy this
/// shape are dropped by the completeness gate before normalization, never
/// repaired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedEvent {
    pub name: String,
    pub id: String,
    /// Display date, e.g. `"Thu, Jul 4"`.
    pub date: String,
    /// Display time, e.g. `"7:30 PM"`.
    pub time: String,
    /// Raw ISO 8601 UTC start datetime, passed through unmodified.
    #[serde(rename = "dateTimeUTC")]
    pub date_time_utc: String,
    /// First price range's minimum with currency code, e.g. `"29.5 USD"`.
    pub price_min: String,
    /// First price range's maximum with currency code.
    pub price_max: String,
    /// `"City, StateCodeOrName"` composed from the first venue.
    pub location: String,
    /// First venue's name.
    pub venue: String,
}

/// Body of a list response: normalized events plus a next-page estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    pub events: Vec<ListedEvent>,
    /// `null` when no further page is believed to exist.
    pub next_page: Option<u32>,
}

/// A normalized single-event record in a detail response.
///
/// Unlike the list shape, every field is individually nullable; unresolved
/// fields are surfaced as `null` rather than dropping the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    /// First price range's minimum as currency, e.g. `"$29.50"`.
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub info: Option<String>,
    pub image: Option<String>,
    pub seatmap: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    /// `"line1, postalCode"` composed from the first venue.
    pub address: Option<String>,
    pub url: Option<String>,
}
