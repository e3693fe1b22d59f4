//! HTTP route handlers for the Encore server.
//!
//! This module provides the HTTP API endpoints:
//!
//! - `GET /events` - Normalized, sorted event listing
//! - `GET /events/{id}` - Full detail for a single event
//! - `GET /health` - Health check endpoint
//!
//! # Architecture
//!
//! All routes share application state through [`AppState`], which contains:
//! - Configuration parsed at startup
//! - The upstream discovery client (pooled, cheap to clone)
//! - Server start time for uptime reporting
//!
//! Query parameters on the listing and detail endpoints are forwarded to the
//! upstream provider verbatim; the server adds its own credentials and page
//! size, with caller values winning on collision.
//!
//! # Example
//!
//! ```rust,no_run
//! use encore_server::routes::{create_router, AppState};
//! use encore_server::config::Config;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("failed to load config");
//!     let state = AppState::new(config).expect("failed to build state");
//!     let app = create_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;
use crate::pipeline;
use crate::types::{EventDetail, EventListResponse};
use crate::upstream::{DiscoveryClient, UpstreamError};

/// Page requested when the caller does not supply one (or supplies garbage).
const DEFAULT_PAGE: u32 = 1;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for all route handlers.
///
/// Cloned per request; the discovery client pools connections internally.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<Config>,

    /// Client for the upstream event-discovery provider.
    pub upstream: DiscoveryClient,

    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Creates application state from configuration, building the upstream
    /// client from it.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Configuration`] if the HTTP client cannot
    /// be created.
    pub fn new(config: Config) -> Result<Self, UpstreamError> {
        let upstream = DiscoveryClient::new(
            config.events_url.clone(),
            config.api_key.clone(),
            config.page_size,
            config.upstream_timeout,
        )?;

        Ok(Self {
            config: Arc::new(config),
            upstream,
            start_time: Instant::now(),
        })
    }

    /// Creates application state with a pre-built upstream client.
    ///
    /// Useful for testing against a mock provider.
    #[must_use]
    pub fn with_upstream(config: Config, upstream: DiscoveryClient) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
            start_time: Instant::now(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &"<Config>")
            .field("upstream", &self.upstream)
            .field("start_time", &self.start_time)
            .finish()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Creates the application router with all routes configured.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// An axum `Router` with the following routes:
/// - `GET /events` - Event listing endpoint
/// - `GET /events/{id}` - Event detail endpoint
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(get_events))
        .route("/events/{id}", get(get_event_detail))
        .route("/health", get(get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// GET /events - Event Listing
// ============================================================================

/// GET /events - Normalized event listing.
///
/// All query parameters are forwarded to the upstream search. The `page`
/// parameter is also read locally to estimate pagination; a missing or
/// unparsable `page` counts as page 1.
///
/// # Responses
///
/// - `200 OK` - Listing with `events` and `nextPage` (possibly `null`)
/// - `500 Internal Server Error` - Upstream failure or malformed record
async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<EventListResponse>, ApiError> {
    let page = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PAGE);

    debug!(page = page, params = params.len(), "Listing events");

    let response = pipeline::list_events(&state.upstream, &params, page).await?;
    Ok(Json(response))
}

// ============================================================================
// GET /events/{id} - Event Detail
// ============================================================================

/// GET /events/{id} - Full detail for a single event.
///
/// Never filters: fields that cannot be resolved come back as `null`.
///
/// # Responses
///
/// - `200 OK` - Detail record with nullable fields
/// - `500 Internal Server Error` - Upstream failure or malformed field
async fn get_event_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<EventDetail>, ApiError> {
    debug!(id = %id, "Fetching event detail");

    let detail = pipeline::event_detail(&state.upstream, &id, &params).await?;
    Ok(Json(detail))
}

// ============================================================================
// GET /health - Health Check
// ============================================================================

/// Response body for health check endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status (always "ok" if responding).
    pub status: String,

    /// Server uptime in seconds.
    pub uptime_seconds: u64,
}

/// GET /health - Health check endpoint.
///
/// Returns server health status. Does not touch the upstream provider.
async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = state.start_time.elapsed();

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: uptime.as_secs(),
    })
}

// ============================================================================
// Tests
// ============================================================================
