use serde_json::Value;
use thiserror::Error;

pub const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

/// Errors returned by calls to the report service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// 401; `detail` is the service's reason when it sent one
    #[error("Unauthorized")]
    Unauthorized { detail: Option<String> },

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Request failed with status {status}")]
    Server { status: u16, detail: Option<String> },

    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Message for the UI: the service's `detail` when it sent one,
    /// otherwise the caller's fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                detail: Some(detail),
                ..
            }
            | ApiError::Unauthorized {
                detail: Some(detail),
            } => detail.clone(),
            ApiError::Unauthorized { detail: None } => SESSION_EXPIRED.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Extract `detail` from an error body.
///
/// Handles the plain form `{"detail": "..."}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn parse_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
