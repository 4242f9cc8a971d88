//! Runtime configuration for the backend endpoint.

/// Backend address used when nothing else is configured (local development).
pub const DEFAULT_API_BASE: &str = "http://localhost:5001";

/// Backend base URL, overridable at build time via `SOMNOVIEW_API_BASE`.
pub fn api_base() -> &'static str {
    option_env!("SOMNOVIEW_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// A report client pointed at the configured backend.
pub fn report_client() -> api::ReportApiClient {
    api::ReportApiClient::new(api_base())
}
