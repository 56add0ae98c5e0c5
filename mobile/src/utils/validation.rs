//! Validation utilities for user input

use crate::core::error::{AppError, Result};

/// Number of digits in a one-time code
pub const OTP_CODE_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, mapping failures to `AppError::Validation`
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((user, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if domain.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    if user.is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if domain.is_empty() || !domain.contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate phone number: optional leading `+`, then 7 to 15 digits.
/// Spaces and dashes are ignored.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let digits: String = digits.chars().filter(|c| *c != ' ' && *c != '-').collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number can only contain digits");
    }

    if digits.len() < 7 || digits.len() > 15 {
        return ValidationResult::err("Phone number must be 7 to 15 digits");
    }

    ValidationResult::ok()
}

/// Validate an OTP destination, which is either an email or a phone number
pub fn validate_destination(destination: &str) -> ValidationResult {
    let destination = destination.trim();
    if destination.is_empty() {
        return ValidationResult::err("Email or phone number is required");
    }

    if destination.contains('@') {
        validate_email(destination)
    } else {
        validate_phone(destination)
    }
}

/// Validate a one-time code: exactly six ASCII digits
pub fn validate_otp_code(code: &str) -> ValidationResult {
    if code.is_empty() {
        return ValidationResult::err("Code is required");
    }

    if code.len() != OTP_CODE_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationResult::err(format!("Code must be exactly {} digits", OTP_CODE_LEN));
    }

    ValidationResult::ok()
}
