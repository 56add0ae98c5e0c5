//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation (email, phone, OTP destination and code)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate serde helpers
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;

pub use validation::{
    validate_destination, validate_email, validate_otp_code, validate_phone, ValidationResult,
};
