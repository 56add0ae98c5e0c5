//! # API Client
//!
//! HTTP client for the conference backend. Every request carries the bearer
//! token of the current session; a `401` is classified and handed to the
//! auth-failure interceptor before the error is returned to the caller.

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::AuthService;
use crate::services::interceptor::AuthFailureInterceptor;
use reqwest::header::WWW_AUTHENTICATE;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ApiErrorBody;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Decide whether a rejected request should send the user to Login.
///
/// Only a session that was authenticated when the request went out and whose
/// credential has since expired is redirected to Login. Anonymous requests
/// and other rejections land on Home.
pub fn classify_auth_failure(
    was_authenticated: bool,
    www_authenticate: Option<&str>,
    body: Option<&ApiErrorBody>,
) -> bool {
    let header_expired = www_authenticate
        .map(|value| value.contains("invalid_token"))
        .unwrap_or(false);
    let body_expired = body.map(ApiErrorBody::is_credential_expiry).unwrap_or(false);

    was_authenticated && (header_expired || body_expired)
}

/// HTTP client for the backend API.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    auth: Arc<dyn AuthService>,
    interceptor: AuthFailureInterceptor,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// Falls back to a default `reqwest::Client` if the configured one cannot
    /// be built.
    pub fn new(
        config: &ClientConfig,
        auth: Arc<dyn AuthService>,
        interceptor: AuthFailureInterceptor,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth,
            interceptor,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[tracing::instrument(skip(self), fields(path = %path))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.client.get(self.url(path));
        self.execute(request, path).await
    }

    #[tracing::instrument(skip(self, body), fields(path = %path))]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.execute(request, path).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> Result<T> {
        // Sampled before sending: a concurrent logout must not change how this
        // request's rejection is classified.
        let was_authenticated = self.auth.is_authenticated();
        let request = match self.auth.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, path, "Network error");
            AppError::Api(format!("Network error: {}", e))
        })?;

        let status = response.status();
        let duration = start.elapsed();

        if status == StatusCode::UNAUTHORIZED {
            let www_authenticate = response
                .headers()
                .get(WWW_AUTHENTICATE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.json::<ApiErrorBody>().await.ok();
            let redirect_to_login =
                classify_auth_failure(was_authenticated, www_authenticate.as_deref(), body.as_ref());

            tracing::warn!(
                path,
                was_authenticated,
                redirect_to_login,
                duration_ms = duration.as_millis(),
                "Request rejected for its credential"
            );
            self.interceptor.notify(redirect_to_login).await;

            let message = body
                .and_then(|b| b.message)
                .unwrap_or_else(|| "session is no longer valid".to_string());
            return Err(AppError::Unauthorized(message));
        }

        if status.is_success() {
            let result = response.json::<T>().await.map_err(|e| {
                tracing::error!(error = %e, path, "Response parse error");
                AppError::Api(format!("Failed to parse response: {}", e))
            });
            if result.is_ok() {
                tracing::debug!(path, duration_ms = duration.as_millis(), "Request succeeded");
            }
            result
        } else {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| status.to_string());
            tracing::warn!(
                path,
                status = status.as_u16(),
                error = %message,
                duration_ms = duration.as_millis(),
                "Request failed"
            );
            Err(AppError::Api(message))
        }
    }
}
