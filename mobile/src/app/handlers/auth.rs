//! # Authentication Handlers
//!
//! Two separate paths land the user on a page after the session ends:
//!
//! - [`handle_logout`]: the user asked to log out. Always ends on `Login`.
//! - [`NavigationAuthHandler`]: the HTTP layer reported a rejected
//!   credential. Ends on `Login` or `Home` depending on the flag the HTTP
//!   layer computed, after logging out if a session was still live.

use crate::app::catalog::Page;
use crate::app::events::{publish, AppEvent};
use crate::app::handlers::navigation::transition;
use crate::app::state::{AppState, AuthFailurePhase};
use crate::core::service::AuthService;
use crate::services::interceptor::AuthFailureHandler;
use async_channel::Sender;
use async_trait::async_trait;
use futures::FutureExt;
use parking_lot::RwLock;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Await `auth.logout()`, absorbing errors and panics.
///
/// Returns whether logout completed cleanly. Callers proceed to their
/// redirect either way.
pub(crate) async fn logout_guarded(auth: &dyn AuthService) -> bool {
    match AssertUnwindSafe(auth.logout()).catch_unwind().await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Logout failed, continuing with redirect");
            false
        }
        Err(_) => {
            tracing::error!("Logout panicked, continuing with redirect");
            false
        }
    }
}

/// User-initiated logout
///
/// Internal handler function - use [`crate::app::App::handle_logout`] instead.
pub(crate) async fn handle_logout(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    auth: Arc<dyn AuthService>,
) {
    logout_guarded(auth.as_ref()).await;

    transition(&state, &event_tx, |state| {
        state.selections.clear();
        Page::Login
    });
    publish(&event_tx, AppEvent::LoggedOut);
    tracing::info!("User logged out");
}

/// Auth-failure handler a mounted controller registers with the interceptor.
///
/// Holds the controller state weakly and a shared `attached` flag the
/// controller clears on unmount, so a copy of this handler that outlives the
/// controller never touches its state.
pub(crate) struct NavigationAuthHandler {
    state: Weak<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    auth: Arc<dyn AuthService>,
    attached: Arc<AtomicBool>,
}

impl NavigationAuthHandler {
    pub(crate) fn new(
        state: &Arc<RwLock<AppState>>,
        event_tx: Sender<AppEvent>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            state: Arc::downgrade(state),
            event_tx,
            auth,
            attached: Arc::new(AtomicBool::new(true)),
        }
    }

    pub(crate) fn attachment(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.attached)
    }

    fn live_state(&self) -> Option<Arc<RwLock<AppState>>> {
        if !self.attached.load(Ordering::Acquire) {
            return None;
        }
        self.state.upgrade()
    }
}

/// Returns this handler's pending failure to `Idle` when handling ends
/// without a redirect: the controller unmounted mid-logout, or the future
/// driving the handler was dropped.
struct PendingClaim {
    state: Arc<RwLock<AppState>>,
    epoch: u64,
}

impl Drop for PendingClaim {
    fn drop(&mut self) {
        if self.state.write().release_auth_failure(Some(self.epoch)) {
            tracing::debug!(epoch = self.epoch, "Auth failure abandoned, phase reset");
        }
    }
}

#[async_trait]
impl AuthFailureHandler for NavigationAuthHandler {
    async fn on_auth_failure(&self, should_redirect_to_login: bool) {
        let Some(state) = self.live_state() else {
            tracing::debug!("Auth failure after unmount ignored");
            return;
        };

        let claim = {
            let mut guard = state.write();
            match guard.claim_auth_failure(should_redirect_to_login) {
                Some(epoch) => epoch,
                None => {
                    tracing::info!(
                        phase = ?guard.auth_failure,
                        redirect_to_login = should_redirect_to_login,
                        "Auth failure already being handled, dropping duplicate"
                    );
                    return;
                }
            }
        };
        let _claim = PendingClaim {
            state: Arc::clone(&state),
            epoch: claim,
        };
        tracing::info!(redirect_to_login = should_redirect_to_login, "Auth failure received");

        if self.auth.is_authenticated() {
            state.write().auth_failure = AuthFailurePhase::LogoutInFlight {
                redirect_to_login: should_redirect_to_login,
            };
            logout_guarded(self.auth.as_ref()).await;
        }

        if !self.attached.load(Ordering::Acquire) {
            tracing::debug!("Controller unmounted during logout, skipping redirect");
            return;
        }

        let target = if should_redirect_to_login {
            Page::Login
        } else {
            Page::Home
        };
        transition(&state, &self.event_tx, |state| {
            state.auth_failure = AuthFailurePhase::Redirected { target };
            target
        });
        publish(&self.event_tx, AppEvent::AuthRedirect { target });
        tracing::info!(page = %target, "Redirected after auth failure");
    }
}
