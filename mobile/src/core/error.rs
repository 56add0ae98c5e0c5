//! # Common Error Types
//!
//! Consolidated error handling for the mobile client core.
//!
//! Navigation never fails: transitions are total and return `()`. Errors
//! only come out of the edges of the core:
//!
//! - **Api**: HTTP transport and decoding failures
//! - **Unauthorized**: a request was rejected for its credential (the
//!   auth-failure interceptor has already been notified when this is returned)
//! - **Auth**: the external auth collaborator failed (e.g. logout could not
//!   clear stored credentials)
//! - **Otp**: the OTP service failed or the OTP state machine refused an action
//! - **Validation**: local input validation (OTP code format)
//! - **Config**: configuration could not be loaded or is invalid
//! - **State**: an operation was attempted on a torn-down controller
//!
//! ```rust
//! use mobile::core::error::AppError;
//!
//! let err = AppError::Validation("Code must be exactly 6 digits".to_string());
//! assert_eq!(err.to_string(), "Validation error: Code must be exactly 6 digits");
//! ```

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error (network, HTTP status, JSON decoding).
    #[error("API error: {0}")]
    Api(String),

    /// The backend rejected the request's credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// External auth collaborator failure.
    #[error("Auth error: {0}")]
    Auth(String),

    /// OTP send/verify failure or an OTP action not allowed in the current phase.
    #[error("OTP error: {0}")]
    Otp(String),

    /// Controller lifecycle error.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(format!("Invalid JSON: {}", err))
    }
}
