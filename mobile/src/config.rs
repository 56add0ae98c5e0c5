//! # Client Configuration
//!
//! Runtime settings for the client core, loaded from environment variables
//! or a JSON file and validated before use.
//!
//! ```rust,no_run
//! use mobile::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//! # Ok::<(), mobile::AppError>(())
//! ```
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CONFERENCE_API_URL` | `http://127.0.0.1:8080` |
//! | `CONFERENCE_REQUEST_TIMEOUT_SECS` | `10` |
//! | `CONFERENCE_OTP_EXPIRY_MINUTES` | `10` |
//! | `CONFERENCE_OTP_RESEND_COOLDOWN_SECS` | `60` |
//! | `CONFERENCE_LOG_DIR` | `logs` |
//! | `RUST_LOG` | `mobile=info,warn` |

use crate::core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "mobile=info,warn";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// OTP validity used until the backend reports its own
    pub otp_expiry_minutes: u32,

    /// Minimum time between a successful send and a manual resend
    pub otp_resend_cooldown_secs: u64,

    pub log_dir: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 10,
            otp_expiry_minutes: 10,
            otp_resend_cooldown_secs: 60,
            log_dir: "logs".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            api_base_url: env::var("CONFERENCE_API_URL").unwrap_or(defaults.api_base_url),
            request_timeout_secs: parse_var(
                "CONFERENCE_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            otp_expiry_minutes: parse_var("CONFERENCE_OTP_EXPIRY_MINUTES", defaults.otp_expiry_minutes)?,
            otp_resend_cooldown_secs: parse_var(
                "CONFERENCE_OTP_RESEND_COOLDOWN_SECS",
                defaults.otp_resend_cooldown_secs,
            )?,
            log_dir: env::var("CONFERENCE_LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }

    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "Loaded client configuration");
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("CONFERENCE_API_URL must not be empty".to_string()));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "CONFERENCE_API_URL must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "CONFERENCE_REQUEST_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }
        if self.otp_expiry_minutes == 0 {
            return Err(AppError::Config(
                "CONFERENCE_OTP_EXPIRY_MINUTES must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} must be a valid number: {}", name, e))),
        Err(_) => Ok(default),
    }
}
