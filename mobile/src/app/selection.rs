//! # Selection Store
//!
//! Typed slots that carry payloads from the screen that picks something to
//! the screen that shows it. Each slot is `Option<T>`: absent until written,
//! overwritten wholesale on each write, never merged.
//!
//! Slots are not tied to the current page. A slot written on an earlier
//! visit may still be present when a screen reads it again, and a screen may
//! be reached before its slot was ever written. Render code matches on the
//! `Option` and shows a loading/empty state for `None`.

use shared::dto::conference::{Delegate, SessionEvent, Speaker, Ticket};
use shared::dto::membership::{ConferencePaymentDraft, MembershipFormDraft, Payment};

use crate::app::catalog::Page;

/// Session identifier as used by agenda, detail and wishlist
pub type SessionId = String;

/// Names of the selection slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Ticket,
    Session,
    MyConferenceSession,
    Payment,
    Speaker,
    Delegate,
    MembershipForm,
    ConferencePayment,
    RegistrationId,
}

/// Ticket chosen on the conference listing, carried to the registration form.
///
/// Every field is optional: the slot holds whatever the listing supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketSelection {
    pub category_name: Option<String>,
    pub ticket: Option<Ticket>,
    pub module_name: Option<String>,
    pub is_residential: Option<bool>,
    pub membership_type: Option<String>,
    pub event_id: Option<i64>,
    pub module_id: Option<i64>,
    pub category_id: Option<i64>,
}

/// A session narrowed to its id; the destination re-fetches the details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSelection {
    pub session_id: SessionId,
}

impl SessionSelection {
    pub fn from_event(event: &SessionEvent) -> Self {
        Self {
            session_id: event.id.clone(),
        }
    }
}

/// Registration id carried to the registration details page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationId(pub String);

impl From<&str> for RegistrationId {
    fn from(id: &str) -> Self {
        RegistrationId(id.to_string())
    }
}

/// All cross-screen slots
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    ticket: Option<TicketSelection>,
    session: Option<SessionSelection>,
    my_conference_session: Option<SessionSelection>,
    payment: Option<Payment>,
    speaker: Option<Speaker>,
    delegate: Option<Delegate>,
    membership_form: Option<MembershipFormDraft>,
    conference_payment: Option<ConferencePaymentDraft>,
    registration_id: Option<RegistrationId>,
}

impl SelectionStore {
    pub fn ticket(&self) -> Option<&TicketSelection> {
        self.ticket.as_ref()
    }

    pub fn session(&self) -> Option<&SessionSelection> {
        self.session.as_ref()
    }

    pub fn my_conference_session(&self) -> Option<&SessionSelection> {
        self.my_conference_session.as_ref()
    }

    pub fn payment(&self) -> Option<&Payment> {
        self.payment.as_ref()
    }

    pub fn speaker(&self) -> Option<&Speaker> {
        self.speaker.as_ref()
    }

    pub fn delegate(&self) -> Option<&Delegate> {
        self.delegate.as_ref()
    }

    pub fn membership_form(&self) -> Option<&MembershipFormDraft> {
        self.membership_form.as_ref()
    }

    pub fn conference_payment(&self) -> Option<&ConferencePaymentDraft> {
        self.conference_payment.as_ref()
    }

    pub fn registration_id(&self) -> Option<&RegistrationId> {
        self.registration_id.as_ref()
    }

    // Writes are crate-private: only transitions fill slots.

    pub(crate) fn set_ticket(&mut self, selection: TicketSelection) {
        self.ticket = Some(selection);
    }

    pub(crate) fn set_session(&mut self, selection: SessionSelection) {
        self.session = Some(selection);
    }

    pub(crate) fn set_my_conference_session(&mut self, selection: SessionSelection) {
        self.my_conference_session = Some(selection);
    }

    pub(crate) fn set_payment(&mut self, payment: Payment) {
        self.payment = Some(payment);
    }

    pub(crate) fn set_speaker(&mut self, speaker: Speaker) {
        self.speaker = Some(speaker);
    }

    pub(crate) fn set_delegate(&mut self, delegate: Delegate) {
        self.delegate = Some(delegate);
    }

    pub(crate) fn set_membership_form(&mut self, draft: MembershipFormDraft) {
        self.membership_form = Some(draft);
    }

    pub(crate) fn set_conference_payment(&mut self, draft: ConferencePaymentDraft) {
        self.conference_payment = Some(draft);
    }

    pub(crate) fn set_registration_id(&mut self, id: RegistrationId) {
        self.registration_id = Some(id);
    }

    /// Whether `slot` currently holds a value
    pub fn is_filled(&self, slot: SlotKind) -> bool {
        match slot {
            SlotKind::Ticket => self.ticket.is_some(),
            SlotKind::Session => self.session.is_some(),
            SlotKind::MyConferenceSession => self.my_conference_session.is_some(),
            SlotKind::Payment => self.payment.is_some(),
            SlotKind::Speaker => self.speaker.is_some(),
            SlotKind::Delegate => self.delegate.is_some(),
            SlotKind::MembershipForm => self.membership_form.is_some(),
            SlotKind::ConferencePayment => self.conference_payment.is_some(),
            SlotKind::RegistrationId => self.registration_id.is_some(),
        }
    }

    /// Whether `page` has the data it reads. Pages without a slot are always ready.
    pub fn is_ready_for(&self, page: Page) -> bool {
        page.required_slot()
            .map(|slot| self.is_filled(slot))
            .unwrap_or(true)
    }

    /// Empty every slot
    pub(crate) fn clear(&mut self) {
        *self = SelectionStore::default();
    }
}
