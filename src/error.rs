use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

use crate::{failure, types::ErrorBody};

/// Message used when neither the upstream nor the transport says anything.
pub const DEFAULT_UPSTREAM_MESSAGE: &str = "Error fetching news";

/// A failed call to the News API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamError {
    pub message: String,
    pub status: Option<StatusCode>,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>, status: Option<StatusCode>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status();
        // the url carries the api key
        let transport = err.without_url().to_string();
        Self::new(upstream_message(None, Some(&transport)), status)
    }
}

/// Picks the most useful message for a failed upstream call.
///
/// The upstream body's `message` field wins, then the transport error message,
/// then [`DEFAULT_UPSTREAM_MESSAGE`]. Blank strings are treated as missing.
pub fn upstream_message(upstream: Option<&Value>, transport: Option<&str>) -> String {
    let from_upstream = upstream
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty());
    let from_transport = transport.map(str::trim).filter(|m| !m.is_empty());

    from_upstream
        .or(from_transport)
        .unwrap_or(DEFAULT_UPSTREAM_MESSAGE)
        .to_string()
}

/// Errors a route can end with.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Required client input is missing.
    #[error("{0}")]
    Validation(&'static str),

    /// The request body could not be understood.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The upstream call failed; the client only sees `operation`.
    #[error("{operation}: {source}")]
    Upstream {
        operation: &'static str,
        #[source]
        source: UpstreamError,
    },

    /// The random aggregation failed; the upstream message is returned as JSON.
    #[error("Error fetching mixed random news: {0}")]
    Aggregate(#[source] UpstreamError),
}

impl RelayError {
    pub fn upstream(operation: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| RelayError::Upstream { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) | RelayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { .. } | RelayError::Aggregate(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            RelayError::Validation(message) => (status, message).into_response(),
            RelayError::InvalidBody(detail) => {
                failure!("Rejected request body: {}", detail);
                (status, "Invalid request body").into_response()
            }
            RelayError::Upstream { operation, source } => {
                failure!("{}: {}", operation, source);
                (status, operation).into_response()
            }
            RelayError::Aggregate(source) => {
                failure!("Error fetching mixed random news: {}", source);
                let body = ErrorBody {
                    error: source.message,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
