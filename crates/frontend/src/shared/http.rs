//! Thin REST client for the report service.
//!
//! Every request carries the stored bearer token. A 401 on a request that
//! carried one clears the token and fires the unauthorized hook, which the
//! auth provider uses to drop the session and fall back to the login view.
//! A 401 without a token (a wrong code on verify-otp) keeps the service's
//! message and leaves the session alone.

use std::fmt;
use std::sync::Arc;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_error::{parse_detail, ApiError};
use super::api_utils::join_url;
use crate::system::auth::storage::TokenStore;

pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.tokens.has_token())
            .finish()
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into(),
            tokens,
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.load()
    }

    pub fn set_token(&self, token: &str) {
        self.tokens.save(token);
    }

    pub fn clear_token(&self) {
        self.tokens.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.has_token()
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.load() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", path);
        let response = self.authorize(Request::get(&self.url(path))).send().await?;
        let response = self.checked(path, response).await?;
        decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", path);
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await?;
        let response = self.checked(path, response).await?;
        decode(response).await
    }

    /// POST without a request body
    pub async fn post_empty<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        log::debug!("POST {}", path);
        let response = self.authorize(Request::post(&self.url(path))).send().await?;
        let response = self.checked(path, response).await?;
        decode(response).await
    }

    /// POST a JSON body and return the raw response bytes (file downloads)
    pub async fn post_for_bytes<B>(&self, path: &str, body: &B) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize,
    {
        log::debug!("POST {} (binary)", path);
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await?;
        let response = self.checked(path, response).await?;
        response.binary().await.map_err(ApiError::from)
    }

    async fn checked(&self, path: &str, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = self.failure(status, &body);
        log::warn!("{} failed: {}", path, err);
        Err(err)
    }

    /// Map a non-2xx status to an error, applying the 401 rule.
    ///
    /// Called right after the response arrives, so the store still holds
    /// whatever token the request was sent with.
    pub fn failure(&self, status: u16, body: &str) -> ApiError {
        if status == 401 {
            if self.tokens.has_token() {
                log::warn!("Service rejected the bearer token, clearing session");
                self.tokens.clear();
                if let Some(hook) = &self.on_unauthorized {
                    hook();
                }
            }
            return ApiError::Unauthorized {
                detail: parse_detail(body),
            };
        }
        ApiError::Server {
            status,
            detail: parse_detail(body),
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Hook to access the API client provided by `AuthProvider`
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryTokens;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn client_with_token() -> (ApiClient, Arc<MemoryTokens>, Arc<AtomicUsize>) {
        let tokens = Arc::new(MemoryTokens::with_token("token-1"));
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let client = ApiClient::new("http://localhost:8000", tokens.clone())
            .with_unauthorized_hook(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        (client, tokens, fired)
    }

    #[test]
    fn test_unauthorized_clears_token_and_fires_hook() {
        let (client, tokens, fired) = client_with_token();
        assert!(client.is_authenticated());

        let err = client.failure(401, r#"{"detail": "Invalid token"}"#);
        assert_eq!(
            err,
            ApiError::Unauthorized {
                detail: Some("Invalid token".to_string())
            }
        );
        assert_eq!(tokens.load(), None);
        assert!(!client.is_authenticated());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_other_failures_keep_token() {
        let (client, tokens, fired) = client_with_token();

        let err = client.failure(404, r#"{"detail": "Data files not found"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                detail: Some("Data files not found".to_string())
            }
        );
        assert_eq!(tokens.load(), Some("token-1".to_string()));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_wrong_code_without_session_keeps_service_message() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let client = ApiClient::new("http://localhost:8000", Arc::new(MemoryTokens::default()))
            .with_unauthorized_hook(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let err = client.failure(401, r#"{"detail":"Invalid OTP code. 2 attempts remaining."}"#);
        assert!(err.is_unauthorized());
        let msg = err.user_message("Failed to verify OTP. Please try again.");
        assert!(msg.contains("Invalid OTP code"), "got: {}", msg);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unauthorized_without_hook() {
        let tokens = Arc::new(MemoryTokens::with_token("token-1"));
        let client = ApiClient::new("http://localhost:8000", tokens.clone());
        assert!(client.failure(401, "").is_unauthorized());
        assert!(!tokens.has_token());
    }

    #[test]
    fn test_token_helpers_and_url() {
        let client = ApiClient::new("http://localhost:8000", Arc::new(MemoryTokens::default()));
        assert_eq!(client.token(), None);
        client.set_token("abc");
        assert_eq!(client.token(), Some("abc".to_string()));
        assert_eq!(bearer("abc"), "Bearer abc");
        client.clear_token();
        assert!(!client.is_authenticated());
        assert_eq!(client.url("/report/filters"), "http://localhost:8000/report/filters");
    }
}
