use contracts::system::auth::{
    LogoutResponse, OtpRequest, OtpResponse, OtpVerifyRequest, TokenResponse, UserInfo,
};

use crate::shared::api_error::ApiError;
use crate::shared::http::ApiClient;

/// Ask the service to email a one-time code
pub async fn request_otp(client: &ApiClient, email: String) -> Result<OtpResponse, ApiError> {
    client
        .post_json("/auth/request-otp", &OtpRequest { email })
        .await
}

/// Exchange the emailed code for a bearer token and store it
pub async fn verify_otp(
    client: &ApiClient,
    email: String,
    otp_code: String,
) -> Result<TokenResponse, ApiError> {
    let token: TokenResponse = client
        .post_json("/auth/verify-otp", &OtpVerifyRequest { email, otp_code })
        .await?;
    client.set_token(&token.access_token);
    Ok(token)
}

/// Get current user info
pub async fn get_current_user(client: &ApiClient) -> Result<UserInfo, ApiError> {
    if !client.is_authenticated() {
        return Err(ApiError::NotAuthenticated);
    }
    client.get_json("/auth/me").await
}

/// Tell the service the session ends. The stored token is cleared whatever the outcome.
pub async fn logout(client: &ApiClient) -> Result<LogoutResponse, ApiError> {
    let result = client.post_empty("/auth/logout").await;
    client.clear_token();
    result
}
