//! # In-Memory Auth
//!
//! Process-local [`AuthService`]: holds the bearer token in memory. Useful
//! for wiring the controller before a persistent credential store exists,
//! and in tests.

use crate::core::error::Result;
use crate::core::service::AuthService;
use async_trait::async_trait;
use parking_lot::RwLock;

#[derive(Default)]
pub struct InMemoryAuth {
    token: RwLock<Option<String>>,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a live session
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Store the token of a fresh login
    pub fn sign_in(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
        tracing::info!("Session started");
    }
}

#[async_trait]
impl AuthService for InMemoryAuth {
    fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    fn access_token(&self) -> Option<String> {
        self.token.read().clone()
    }

    async fn logout(&self) -> Result<()> {
        self.token.write().take();
        tracing::info!("Credentials cleared");
        Ok(())
    }
}
