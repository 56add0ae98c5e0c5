//! # Navigation Handlers
//!
//! Every page change goes through [`transition`]: slot writes and the page
//! switch happen under one write guard, so anything running between two
//! transitions (an auth-failure redirect in particular) sees either all of a
//! transition or none of it.

use crate::app::catalog::Page;
use crate::app::events::{publish, AppEvent};
use crate::app::selection::{RegistrationId, SessionSelection, TicketSelection};
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::conference::{Delegate, SessionEvent, Speaker};
use shared::dto::membership::{ConferencePaymentDraft, MembershipFormDraft, Payment};
use std::sync::Arc;

/// Apply `update` and switch to the page it returns, atomically.
///
/// `update` sees the state before the page changes, so it can read the
/// page being left.
pub(crate) fn transition<F>(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, update: F) -> Page
where
    F: FnOnce(&mut AppState) -> Page,
{
    let (from, to) = {
        let mut state = state.write();
        let to = update(&mut state);
        let from = std::mem::replace(&mut state.navigation.current, to);
        (from, to)
    };

    tracing::debug!(from = %from, to = %to, "Page changed");
    publish(event_tx, AppEvent::PageChanged { from, to });
    to
}

/// Switch to a page that carries no payload
///
/// Internal handler function - use the `go_*` methods on [`crate::app::App`] instead.
pub(crate) fn go_to(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, page: Page) {
    transition(&state, &event_tx, |_| page);
}

pub(crate) fn go_conference_form(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    selection: TicketSelection,
) {
    transition(&state, &event_tx, |state| {
        state.selections.set_ticket(selection);
        Page::ConferenceForm
    });
}

/// Store only the session id; the details page re-fetches the rest.
pub(crate) fn go_session_details(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    event: &SessionEvent,
) {
    let selection = SessionSelection::from_event(event);
    transition(&state, &event_tx, |state| {
        state.selections.set_session(selection);
        Page::SessionDetails
    });
}

pub(crate) fn go_my_conference_session(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    event: &SessionEvent,
) {
    let selection = SessionSelection::from_event(event);
    transition(&state, &event_tx, |state| {
        state.selections.set_my_conference_session(selection);
        Page::MyConferenceSession
    });
}

pub(crate) fn go_speaker_details(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, speaker: Speaker) {
    transition(&state, &event_tx, |state| {
        state.selections.set_speaker(speaker);
        Page::SpeakerDetails
    });
}

pub(crate) fn go_delegate_details(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, delegate: Delegate) {
    transition(&state, &event_tx, |state| {
        state.selections.set_delegate(delegate);
        Page::DelegateDetails
    });
}

pub(crate) fn go_payment_details(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, payment: Payment) {
    transition(&state, &event_tx, |state| {
        state.selections.set_payment(payment);
        Page::PaymentDetails
    });
}

pub(crate) fn go_membership_payment(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    draft: MembershipFormDraft,
) {
    transition(&state, &event_tx, |state| {
        state.selections.set_membership_form(draft);
        Page::MembershipPayment
    });
}

pub(crate) fn go_conference_payment(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    draft: ConferencePaymentDraft,
) {
    transition(&state, &event_tx, |state| {
        state.selections.set_conference_payment(draft);
        Page::ConferencePayment
    });
}

pub(crate) fn go_registration_details(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    registration_id: RegistrationId,
) {
    transition(&state, &event_tx, |state| {
        state.selections.set_registration_id(registration_id);
        Page::RegistrationDetails
    });
}

/// Remember the current page, then show the profile
pub(crate) fn go_profile(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    transition(&state, &event_tx, |state| {
        let current = state.navigation.current;
        state.navigation.remember(current, Page::Profile);
        Page::Profile
    });
}

/// Remember `back_target` (or the current page), then show the edit screen
pub(crate) fn go_edit_profile(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    back_target: Option<Page>,
) {
    transition(&state, &event_tx, |state| {
        let back = back_target.unwrap_or(state.navigation.current);
        state.navigation.remember(back, Page::EditProfile);
        Page::EditProfile
    });
}

/// Return to the remembered page (or home) and forget it
pub(crate) fn go_back(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> Page {
    transition(&state, &event_tx, |state| {
        state.navigation.previous.take().unwrap_or(Page::Home)
    })
}

pub(crate) fn add_to_wishlist(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, session_id: String) -> bool {
    let added = state.write().wishlist.add(session_id.clone());
    if added {
        tracing::debug!(session_id = %session_id, "Session added to wishlist");
        publish(&event_tx, AppEvent::WishlistChanged { session_id, added: true });
    }
    added
}

pub(crate) fn remove_from_wishlist(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, session_id: &str) -> bool {
    let removed = state.write().wishlist.remove(session_id);
    if removed {
        tracing::debug!(session_id = %session_id, "Session removed from wishlist");
        publish(
            &event_tx,
            AppEvent::WishlistChanged {
                session_id: session_id.to_string(),
                added: false,
            },
        );
    }
    removed
}
