//! API utilities for frontend-backend communication
//!
//! Resolves the report service base URL and joins request paths onto it.

/// Port the report service listens on when served next to the client
pub const DEFAULT_API_PORT: u16 = 8000;

/// Used when neither a build-time override nor a browser location is available
pub const FALLBACK_API_BASE: &str = "http://localhost:8000";

/// Get the base URL for API requests
///
/// Order of precedence:
/// 1. `REPORT_API_BASE_URL` set at build time
/// 2. current window location with port 8000
/// 3. [`FALLBACK_API_BASE`]
pub fn api_base() -> String {
    option_env!("REPORT_API_BASE_URL")
        .and_then(normalize_base_url)
        .or_else(location_base)
        .unwrap_or_else(|| FALLBACK_API_BASE.to_string())
}

/// Base URL derived from the page location, e.g. `https://reports.example.com:8000`
fn location_base() -> Option<String> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().ok().filter(|h| !h.is_empty())?;
    Some(format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT))
}

/// Trim whitespace and trailing slashes; `None` for an empty value.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Join an endpoint path (`/report/filters`) onto a base URL
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
