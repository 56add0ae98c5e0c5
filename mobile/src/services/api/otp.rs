//! # OTP Endpoints
//!
//! Backend implementation of [`OtpService`].

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use crate::core::service::{OtpDispatch, OtpService};
use async_trait::async_trait;
use shared::{OtpSendRequest, OtpSendResponse, OtpVerifyRequest, OtpVerifyResponse};
use std::sync::Arc;

const SEND_PATH: &str = "/api/auth/otp/send";
const VERIFY_PATH: &str = "/api/auth/otp/verify";

/// Sends and verifies one-time codes through the backend.
#[derive(Clone)]
pub struct HttpOtpService {
    api: Arc<ApiClient>,
}

impl HttpOtpService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OtpService for HttpOtpService {
    #[tracing::instrument(skip(self), fields(destination = %destination))]
    async fn send_code(&self, destination: &str) -> Result<OtpDispatch> {
        tracing::info!("Requesting OTP");
        let request = OtpSendRequest {
            destination: destination.to_string(),
        };

        let response: OtpSendResponse = self
            .api
            .post_json(SEND_PATH, &request)
            .await
            .map_err(|e| match e {
                AppError::Api(msg) => AppError::Otp(format!("Failed to send code: {}", msg)),
                other => other,
            })?;

        tracing::info!(expiry_minutes = response.expiry_minutes, "OTP sent");
        Ok(OtpDispatch {
            expiry_minutes: response.expiry_minutes,
        })
    }

    #[tracing::instrument(skip(self, code), fields(destination = %destination))]
    async fn verify_code(&self, destination: &str, code: &str) -> Result<bool> {
        let request = OtpVerifyRequest {
            destination: destination.to_string(),
            code: code.to_string(),
        };

        let response: OtpVerifyResponse = self
            .api
            .post_json(VERIFY_PATH, &request)
            .await
            .map_err(|e| match e {
                AppError::Api(msg) => AppError::Otp(format!("Failed to verify code: {}", msg)),
                other => other,
            })?;

        if !response.verified {
            tracing::warn!(message = ?response.message, "OTP rejected");
        }
        Ok(response.verified)
    }
}
