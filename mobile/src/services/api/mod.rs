//! # Backend API Module
//!
//! HTTP access to the conference backend.
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient, request execution, 401 classification
//! └── otp.rs      - OTP send/verify endpoints
//! ```

pub mod client;
pub mod otp;

pub use client::{classify_auth_failure, ApiClient};
pub use otp::HttpOtpService;
