//! Client for the upstream event-discovery provider.
//!
//! [`DiscoveryClient`] wraps the provider's search endpoint
//! (`GET {events_url}.json`) and single-resource endpoint
//! (`GET {events_url}/{id}.json`). Caller-supplied query parameters are
//! forwarded as-is on top of the client's defaults (`apikey`, and `size`
//! for searches), with caller values winning on collision.
//!
//! Failures are fail-fast: a non-success status, a missing search envelope,
//! or an undecodable body all abort the request. No retry is attempted; a
//! configurable timeout bounds every call.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

use crate::types::{RawEvent, SearchEnvelope};

/// Errors from the upstream provider boundary.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request exceeded the configured timeout.
    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    /// The provider is unreachable.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// The provider answered with a non-success status.
    #[error("unexpected upstream status {status}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The provider's body did not match the expected shape.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    /// The client itself could not be constructed.
    #[error("client configuration error: {0}")]
    Configuration(String),
}

/// Client for the event-discovery provider.
///
/// Holds a pooled `reqwest::Client`; cheap to clone and safe to share
/// across request handlers.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    http_client: Client,
    /// Base URL of the events resource, without the `.json` suffix.
    events_url: String,
    api_key: String,
    page_size: u32,
    timeout: Duration,
}

impl DiscoveryClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `events_url` - Events resource base URL (no trailing `.json`)
    /// * `api_key` - Provider API key, sent as the `apikey` query parameter
    /// * `page_size` - Default `size` parameter for searches
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Configuration`] if the HTTP client cannot
    /// be created.
    pub fn new(
        events_url: impl Into<String>,
        api_key: impl Into<String>,
        page_size: u32,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let events_url = events_url.into().trim_end_matches('/').to_string();

        let http_client = Client::builder().timeout(timeout).build().map_err(|e| {
            UpstreamError::Configuration(format!("failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            http_client,
            events_url,
            api_key: api_key.into(),
            page_size,
            timeout,
        })
    }

    /// Default page size sent to the search endpoint.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Searches for events, forwarding `params` to the provider.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Status`] on any non-2xx response
    /// - [`UpstreamError::InvalidResponse`] if the body is not JSON or
    ///   lacks the `_embedded.events` envelope
    /// - [`UpstreamError::Timeout`] / [`UpstreamError::Unavailable`] on
    ///   transport failures
    pub async fn search_events(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<Vec<RawEvent>, UpstreamError> {
        let url = format!("{}.json", self.events_url);
        let query = self.merged_query(params, true);

        debug!(url = %url, "Searching upstream events");

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Upstream search failed");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let envelope: SearchEnvelope = response.json().await.map_err(|e| {
            UpstreamError::InvalidResponse(format!("failed to parse search response: {e}"))
        })?;

        let events = envelope
            .embedded
            .map(|embedded| embedded.events)
            .ok_or_else(|| {
                UpstreamError::InvalidResponse("search response missing _embedded envelope".into())
            })?;

        debug!(count = events.len(), "Upstream search returned events");

        Ok(events)
    }

    /// Fetches a single event by its identifier.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::search_events`], minus the envelope check:
    /// the body is expected to be a single raw event record.
    pub async fn fetch_event(
        &self,
        id: &str,
        params: &HashMap<String, String>,
    ) -> Result<RawEvent, UpstreamError> {
        let url = format!("{}/{id}.json", self.events_url);
        let query = self.merged_query(params, false);

        debug!(url = %url, "Fetching upstream event");

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Upstream event fetch failed");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| {
            UpstreamError::InvalidResponse(format!("failed to parse event response: {e}"))
        })
    }

    /// Merges default parameters with caller-forwarded ones.
    ///
    /// Defaults go in first; caller parameters overwrite on key collision,
    /// so a caller-supplied `size` overrides the configured page size.
    fn merged_query(
        &self,
        params: &HashMap<String, String>,
        with_size: bool,
    ) -> Vec<(String, String)> {
        let mut merged = HashMap::new();
        merged.insert("apikey".to_string(), self.api_key.clone());
        if with_size {
            merged.insert("size".to_string(), self.page_size.to_string());
        }
        merged.extend(params.clone());
        merged.into_iter().collect()
    }

    fn map_transport_error(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else if err.is_connect() {
            UpstreamError::Unavailable(format!("connection failed: {err}"))
        } else {
            UpstreamError::Unavailable(format!("request failed: {err}"))
        }
    }
}
