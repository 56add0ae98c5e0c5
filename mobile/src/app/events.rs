//! # Application Events
//!
//! Notifications published by the controller and its background tasks for
//! the render layer to react to.

use crate::app::catalog::Page;

/// Controller notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The visible page changed
    PageChanged { from: Page, to: Page },
    /// An auth failure redirected the user
    AuthRedirect { target: Page },
    /// User-initiated logout finished
    LoggedOut,
    /// Wishlist membership of a session changed
    WishlistChanged { session_id: String, added: bool },
    /// OTP countdown advanced
    OtpTick { remaining_secs: u64 },
    /// OTP countdown reached zero
    OtpExpired,
}

/// Events held for a render layer that has not drained yet; newer events are
/// dropped once the queue is full.
pub const EVENT_QUEUE_CAPACITY: usize = 256;

/// Publish without blocking; a full or closed channel drops the event.
pub(crate) fn publish(event_tx: &async_channel::Sender<AppEvent>, event: AppEvent) {
    if let Err(e) = event_tx.try_send(event) {
        tracing::trace!(error = %e, "Event dropped");
    }
}
