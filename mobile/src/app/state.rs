//! # Application State Types
//!
//! The state owned by one controller instance: navigation, selection slots,
//! the wishlist and the auth-failure sub-flow phase.

use crate::app::catalog::Page;
use crate::app::selection::SelectionStore;
use crate::app::wishlist::WishlistSet;

/// Current page plus a single remembered page for back navigation.
///
/// Not a stack: one level is kept and it is overwritten, never pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub(crate) current: Page,
    pub(crate) previous: Option<Page>,
}

impl NavigationState {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn previous(&self) -> Option<Page> {
        self.previous
    }

    /// Record `page` as the page to return to from `target`.
    ///
    /// `EditProfile` is never recorded, and neither is `target` itself.
    /// Returns whether the slot was written.
    pub(crate) fn remember(&mut self, page: Page, target: Page) -> bool {
        if page == Page::EditProfile || page == target {
            tracing::debug!(page = %page, destination = %target, "Not recording back target");
            return false;
        }
        self.previous = Some(page);
        true
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: Page::Home,
            previous: None,
        }
    }
}

/// Phase of the auth-failure sub-flow.
///
/// `FailureReceived` and `LogoutInFlight` carry the flag captured when the
/// failure arrived; the redirect is decided from it, never from a second
/// read of the live auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthFailurePhase {
    #[default]
    Idle,
    FailureReceived { redirect_to_login: bool },
    LogoutInFlight { redirect_to_login: bool },
    Redirected { target: Page },
}

impl AuthFailurePhase {
    /// A failure is being handled and has not redirected yet
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            AuthFailurePhase::FailureReceived { .. } | AuthFailurePhase::LogoutInFlight { .. }
        )
    }
}

/// Controller state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) navigation: NavigationState,
    pub(crate) selections: SelectionStore,
    pub(crate) wishlist: WishlistSet,
    pub(crate) auth_failure: AuthFailurePhase,
    /// Bumped each time a handler claims a failure
    pub(crate) auth_failure_epoch: u64,
}

impl AppState {
    pub fn current_page(&self) -> Page {
        self.navigation.current
    }

    pub fn previous_page(&self) -> Option<Page> {
        self.navigation.previous
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    pub fn wishlist(&self) -> &WishlistSet {
        &self.wishlist
    }

    pub fn auth_failure(&self) -> AuthFailurePhase {
        self.auth_failure
    }

    /// Start handling a failure unless one is already pending.
    ///
    /// Returns the claim's epoch, or `None` for a duplicate.
    pub(crate) fn claim_auth_failure(&mut self, redirect_to_login: bool) -> Option<u64> {
        if self.auth_failure.is_pending() {
            return None;
        }
        self.auth_failure_epoch += 1;
        self.auth_failure = AuthFailurePhase::FailureReceived { redirect_to_login };
        Some(self.auth_failure_epoch)
    }

    /// Drop a pending failure without redirecting.
    ///
    /// With `Some(epoch)`, only the claim made at that epoch is released.
    pub(crate) fn release_auth_failure(&mut self, epoch: Option<u64>) -> bool {
        let owned = epoch.map_or(true, |epoch| epoch == self.auth_failure_epoch);
        if owned && self.auth_failure.is_pending() {
            self.auth_failure = AuthFailurePhase::Idle;
            return true;
        }
        false
    }
}
