//! Request-level error handling for the Encore server.
//!
//! [`ApiError`] is the error boundary for the List and Detail pipelines.
//! Both of its sources, an upstream failure and a malformed date/time
//! field, fail the whole request: no partial recovery, no retry. The
//! client sees a generic 500 body; the underlying detail is logged, never
//! returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::format::FormatError;
use crate::upstream::UpstreamError;

/// Failure of a pipeline request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream fetch failed or returned an unusable response.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] UpstreamError),

    /// A raw date or time field did not match its expected pattern.
    #[error("malformed upstream field: {0}")]
    Malformed(#[from] FormatError),
}

/// JSON error body returned to clients. Deliberately generic.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
