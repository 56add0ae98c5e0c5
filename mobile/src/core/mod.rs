//! # Core Abstractions
//!
//! Error types and the service traits the navigation core is injected with.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Collaborator traits (`AuthService`, `OtpService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mobile::core::service::AuthService;
//!
//! // In production: the app's credential store
//! let auth: Arc<dyn AuthService> = Arc::new(mobile::services::auth::InMemoryAuth::new());
//!
//! // In tests: a mock that records the order of effects
//! let auth: Arc<dyn AuthService> = Arc::new(RecordingAuth::authenticated());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{AuthService, OtpDispatch, OtpService};
