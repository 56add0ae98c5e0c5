//! # Auth-Failure Interceptor
//!
//! Registration point between the HTTP layer and the navigation controller.
//! The HTTP layer calls [`AuthFailureInterceptor::notify`] when a request is
//! rejected for its credential; whichever handler is registered decides
//! where the user lands.
//!
//! At most one handler is active. With none registered the interceptor is a
//! no-op, so a failure that arrives after the controller unmounted is dropped.
//!
//! ```rust,ignore
//! let interceptor = AuthFailureInterceptor::new();
//! let api = ApiClient::new(&config, auth.clone(), interceptor.clone());
//! let mut app = App::new(config, auth, otp, interceptor);
//! app.mount();
//! ```

use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Receiver of auth-failure notifications.
#[async_trait]
pub trait AuthFailureHandler: Send + Sync {
    /// `should_redirect_to_login` was computed by the HTTP layer: the session
    /// was authenticated when the request was made and the credential expired.
    async fn on_auth_failure(&self, should_redirect_to_login: bool);
}

/// Process-wide interceptor for HTTP layers that cannot be handed one.
static GLOBAL_INTERCEPTOR: Lazy<AuthFailureInterceptor> = Lazy::new(AuthFailureInterceptor::new);

/// Shared handle to the handler slot; clones refer to the same slot.
#[derive(Clone, Default)]
pub struct AuthFailureInterceptor {
    handler: Arc<RwLock<Option<Arc<dyn AuthFailureHandler>>>>,
}

impl AuthFailureInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance
    pub fn global() -> &'static AuthFailureInterceptor {
        &GLOBAL_INTERCEPTOR
    }

    /// Install `handler`, replacing any previous one
    pub fn register(&self, handler: Arc<dyn AuthFailureHandler>) {
        let previous = self.handler.write().replace(handler);
        if previous.is_some() {
            tracing::warn!("Auth-failure handler replaced while another was registered");
        } else {
            tracing::debug!("Auth-failure handler registered");
        }
    }

    /// Go back to the no-op handler
    pub fn reset(&self) {
        self.handler.write().take();
        tracing::debug!("Auth-failure handler reset to no-op");
    }

    /// Go back to the no-op handler if `handler` is the one registered.
    ///
    /// Returns whether it was.
    pub fn unregister(&self, handler: &Arc<dyn AuthFailureHandler>) -> bool {
        let mut slot = self.handler.write();
        match slot.as_ref() {
            Some(current) if Arc::ptr_eq(current, handler) => {
                slot.take();
                tracing::debug!("Auth-failure handler unregistered");
                true
            }
            _ => false,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.handler.read().is_some()
    }

    /// Deliver a failure to the registered handler and wait for it to finish.
    pub async fn notify(&self, should_redirect_to_login: bool) {
        // Clone out so the slot lock is not held while the handler runs
        let handler = self.handler.read().clone();
        match handler {
            Some(handler) => handler.on_auth_failure(should_redirect_to_login).await,
            None => tracing::debug!(
                redirect_to_login = should_redirect_to_login,
                "Auth failure with no handler registered"
            ),
        }
    }

    /// [`notify`](Self::notify) on a background task, for callers outside async code.
    pub fn fire(&self, should_redirect_to_login: bool) -> JoinHandle<()> {
        let interceptor = self.clone();
        crate::debug::spawn_tracked("auth_failure_notify", async move {
            interceptor.notify(should_redirect_to_login).await;
        })
    }
}
