use contracts::system::health::HealthStatus;

use crate::shared::api_error::ApiError;
use crate::shared::http::ApiClient;

/// Backend liveness, shown as a badge in the top header
pub async fn health_check(client: &ApiClient) -> Result<HealthStatus, ApiError> {
    client.get_json("/health").await
}

/// Badge text and whether the service counts as up
pub fn health_label(result: &Result<HealthStatus, ApiError>) -> (&'static str, bool) {
    match result {
        Ok(status) if status.is_healthy() => ("Service online", true),
        Ok(_) => ("Service degraded", false),
        Err(_) => ("Service unavailable", false),
    }
}
