//! # Service Traits
//!
//! Seams to the collaborators the navigation core does not own. Production
//! wiring passes real implementations; tests pass mocks.

use crate::core::error::Result;
use async_trait::async_trait;

/// External auth collaborator.
///
/// Owns credential storage. The navigation core only reads the live
/// authenticated flag and asks it to log out.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Whether a session is currently authenticated
    fn is_authenticated(&self) -> bool;

    /// Bearer token for outgoing requests, if any
    fn access_token(&self) -> Option<String>;

    /// Clear stored credentials. Completes only once they are gone.
    async fn logout(&self) -> Result<()>;
}

/// Result of a successful OTP send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpDispatch {
    /// Minutes until the delivered code expires
    pub expiry_minutes: u32,
}

/// External OTP delivery/verification collaborator.
#[async_trait]
pub trait OtpService: Send + Sync {
    /// Send a fresh code to `destination` (phone number or email)
    async fn send_code(&self, destination: &str) -> Result<OtpDispatch>;

    /// Check `code` for `destination`; `Ok(false)` means the server rejected it
    async fn verify_code(&self, destination: &str, code: &str) -> Result<bool>;
}
