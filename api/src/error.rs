//! Error types for the report API client.

use thiserror::Error;

/// Errors returned by [`ReportApiClient`](crate::ReportApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session or report does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response, with status code and body.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
