//! The list and detail normalization pipelines.
//!
//! Both pipelines take request-scoped inputs and a [`DiscoveryClient`],
//! touch no shared mutable state, and fail the whole request on an
//! upstream failure or a malformed date/time field. Incomplete *records*
//! inside a successful upstream response never fail a request: the list
//! pipeline drops them, the detail pipeline surfaces nulls.

use std::collections::HashMap;

use tracing::debug;

use crate::error::ApiError;
use crate::extract;
use crate::format::{format_date, format_time};
use crate::pagination;
use crate::rank;
use crate::types::{EventDetail, EventListResponse, ListedEvent};
use crate::upstream::DiscoveryClient;

/// Runs the list pipeline: fetch, gate, sort, format, paginate.
///
/// Steps, in order:
/// 1. Search upstream, forwarding `params` as-is.
/// 2. Drop records that fail the completeness gate ([`extract::listing`]).
/// 3. Sort ascending by composite start instant ([`rank::sort_by_start`]).
/// 4. Reformat date and time for display. This happens after sorting,
///    which needs the raw machine-sortable form.
/// 5. Estimate the next page from the raw (pre-filter) count.
///
/// # Errors
///
/// Fails on any upstream failure or on a gated record whose date or time
/// does not parse.
pub async fn list_events(
    upstream: &DiscoveryClient,
    params: &HashMap<String, String>,
    page: u32,
) -> Result<EventListResponse, ApiError> {
    let raw_events = upstream.search_events(params).await?;
    let raw_count = raw_events.len();

    let drafts: Vec<_> = raw_events.iter().filter_map(extract::listing).collect();
    debug!(
        raw = raw_count,
        eligible = drafts.len(),
        "Gated raw events for listing"
    );

    let drafts = rank::sort_by_start(drafts)?;

    let events = drafts
        .into_iter()
        .map(|draft| {
            Ok(ListedEvent {
                date: format_date(&draft.local_date)?,
                time: format_time(&draft.local_time)?,
                name: draft.name,
                id: draft.id,
                date_time_utc: draft.date_time_utc,
                price_min: draft.price_min,
                price_max: draft.price_max,
                location: draft.location,
                venue: draft.venue,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    let next_page = pagination::next_page(page, raw_count, upstream.page_size() as usize);

    Ok(EventListResponse { events, next_page })
}

/// Runs the detail pipeline: fetch one event and extract the full field
/// set, with display formatting applied to date and time when present.
///
/// No completeness gate, no sort, no pagination: unresolved optional
/// fields come back as `null`.
///
/// # Errors
///
/// Fails on any upstream failure, or if a present date/time field does not
/// parse.
pub async fn event_detail(
    upstream: &DiscoveryClient,
    id: &str,
    params: &HashMap<String, String>,
) -> Result<EventDetail, ApiError> {
    let raw_event = upstream.fetch_event(id, params).await?;

    let mut detail = extract::detail(&raw_event);
    detail.date = detail.date.as_deref().map(format_date).transpose()?;
    detail.time = detail.time.as_deref().map(format_time).transpose()?;

    Ok(detail)
}
