//! REST client for the sleep-study backend.
//!
//! Works on WASM (browser `fetch`), desktop, and server targets via
//! [`reqwest`]. The client is deliberately thin: it resolves the three read
//! endpoints the viewer needs and maps HTTP failures to [`ApiError`]; all
//! report interpretation happens downstream in the ui crate.
//!
//! # Example
//!
//! ```no_run
//! use api::ReportApiClient;
//!
//! # async fn example() -> Result<(), api::ApiError> {
//! let client = ReportApiClient::new("http://localhost:5001");
//! let sessions = client.sessions().await?;
//! println!("{} recorded sessions", sessions.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod types;

pub use error::ApiError;
pub use types::{
    FullReport, Metric, OxygenSaturation, Overview, PositionAnalysis, Pulse, Reading,
    RespiratoryIndices, SessionReport, SessionSummary, SignalQuality, SnoringEvents,
    TrendOverview,
};

use reqwest::Client;

/// A typed read-only client for the sleep-study report API.
#[derive(Debug, Clone)]
pub struct ReportApiClient {
    base_url: String,
    http: Client,
}

impl ReportApiClient {
    /// Create a new client pointing at the given backend base URL,
    /// e.g. `"http://localhost:5001"`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// `GET /sessions` — the navigation list of recorded sessions.
    pub async fn sessions(&self) -> Result<Vec<SessionSummary>, ApiError> {
        let response = self.http.get(self.url("/sessions")).send().await?;
        let body: types::SessionsResponse = parse_response(response).await?;
        Ok(body.sessions)
    }

    /// `GET /session/{id}/report` — summary statistics plus raw readings.
    pub async fn report(&self, session_id: u64) -> Result<SessionReport, ApiError> {
        log::debug!("Fetching summary report for session {session_id}");
        let response = self
            .http
            .get(self.url(&format!("/session/{session_id}/report")))
            .send()
            .await?;
        parse_response(response).await
    }

    /// `GET /session/{id}/full_report` — the detailed sectioned report with
    /// trend arrays.
    pub async fn full_report(&self, session_id: u64) -> Result<FullReport, ApiError> {
        log::debug!("Fetching full report for session {session_id}");
        let response = self
            .http
            .get(self.url(&format!("/session/{session_id}/full_report")))
            .send()
            .await?;
        parse_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a 2xx body as `T`, or map the failure to [`ApiError`].
async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(response.json().await?),
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::Server { status, body: text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ReportApiClient::new("http://localhost:5001/");
        assert_eq!(
            client.url("/session/3/report"),
            "http://localhost:5001/session/3/report"
        );
    }
}
