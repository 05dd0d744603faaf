use std::sync::Arc;

use contracts::system::auth::OtpResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::AuthState;
use super::storage::LocalStorageTokens;
use super::api;
use crate::shared::api_error::SESSION_EXPIRED;
use crate::shared::config::AppConfig;
use crate::shared::http::{use_api, ApiClient};

/// Auth context provider component
///
/// Owns the session signal and the API client. The client's 401 hook expires
/// the session, which swaps the shell back to the login page.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let auth_state = RwSignal::new(AuthState::default());

    let tokens = Arc::new(LocalStorageTokens::new(config.token_storage_key.clone()));
    let client = ApiClient::new(config.api_base_url.clone(), tokens).with_unauthorized_hook(
        move || auth_state.update(|s| s.expired(SESSION_EXPIRED.to_string())),
    );
    log::info!("Report service at {}", client.base_url());

    provide_context(auth_state);
    provide_context(client.clone());

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            restore_session(&client, auth_state).await;
        });
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

async fn restore_session(client: &ApiClient, auth_state: RwSignal<AuthState>) {
    if !client.is_authenticated() {
        auth_state.update(|s| s.checked = true);
        return;
    }

    auth_state.update(|s| s.begin());
    match api::get_current_user(client).await {
        Ok(user) => {
            log::info!("Restored session for {}", user.email);
            auth_state.update(|s| s.signed_in(user));
        }
        Err(e) => {
            // Token invalid or expired; start from the login page
            log::info!("Stored session rejected: {}", e);
            client.clear_token();
            auth_state.update(|s| s.signed_out());
        }
    }
}

/// Helper: Request a one-time code for `email`
pub async fn do_request_otp(
    client: &ApiClient,
    auth_state: RwSignal<AuthState>,
    email: String,
) -> Result<OtpResponse, String> {
    auth_state.update(|s| s.begin());
    match api::request_otp(client, email).await {
        Ok(response) => {
            log::info!("OTP sent to {}", response.email);
            auth_state.update(|s| s.finish());
            Ok(response)
        }
        Err(e) => {
            let message = e.user_message("Failed to request OTP. Please try again.");
            log::warn!("OTP request failed: {}", e);
            auth_state.update(|s| s.failed(message.clone()));
            Err(message)
        }
    }
}

/// Helper: Verify the code, store the token and load the user
pub async fn do_verify_otp(
    client: &ApiClient,
    auth_state: RwSignal<AuthState>,
    email: String,
    otp_code: String,
) -> Result<(), String> {
    auth_state.update(|s| s.begin());

    let result = async {
        api::verify_otp(client, email, otp_code).await?;
        api::get_current_user(client).await
    }
    .await;

    match result {
        Ok(user) => {
            log::info!("Signed in as {}", user.email);
            auth_state.update(|s| s.signed_in(user));
            Ok(())
        }
        Err(e) => {
            let message = e.user_message("Failed to verify OTP. Please try again.");
            log::warn!("OTP verification failed: {}", e);
            auth_state.update(|s| s.failed(message.clone()));
            Err(message)
        }
    }
}

/// Helper: Perform logout
pub async fn do_logout(client: &ApiClient, auth_state: RwSignal<AuthState>) {
    auth_state.update(|s| s.begin());
    if let Err(e) = api::logout(client).await {
        log::warn!("Logout request failed: {}", e);
    }
    auth_state.update(|s| s.signed_out());
}

/// Spawn a logout from an event handler
pub fn logout_action() -> impl Fn() + Copy + 'static {
    let auth_state = use_auth();
    let client = StoredValue::new(use_api());
    move || {
        let client = client.get_value();
        spawn_local(async move {
            do_logout(&client, auth_state).await;
        });
    }
}
