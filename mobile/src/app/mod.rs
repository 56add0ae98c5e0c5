//! # Navigation Controller
//!
//! The [`App`] struct is the single authority for which page is visible and
//! for the payloads carried between pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Render layer (screens)                                     │
//! │   - calls go_*() / add_to_wishlist() / handle_logout()      │
//! │   - reads snapshot() / read() and drains events()           │
//! └────────────┬───────────────────────────────▲────────────────┘
//!              │                               │ AppEvent
//! ┌────────────▼───────────────────────────────┴────────────────┐
//! │  App                                                        │
//! │   State: Arc<RwLock<AppState>>                              │
//! │    - navigation (current + one remembered page)             │
//! │    - selections (typed slots)                               │
//! │    - wishlist                                               │
//! │    - auth-failure phase                                     │
//! └────────────▲───────────────────────────────┬────────────────┘
//!              │ NavigationAuthHandler         │ OtpSession
//! ┌────────────┴──────────────┐   ┌────────────▼────────────────┐
//! │ AuthFailureInterceptor    │   │ otp_countdown task (tokio)  │
//! │  (notified by ApiClient)  │   │  1 s interval               │
//! └───────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! ## State Management Pattern
//!
//! Every transition takes the write lock once, writes its slot and the page,
//! and releases the lock before publishing. No lock is held across an
//! `.await`, so an auth-failure redirect running on another task observes a
//! transition either completely or not at all.
//!
//! ```rust,ignore
//! let state = app.read();
//! render(state.current_page(), state.selections());
//! drop(state);
//! ```
//!
//! ## Lifecycle
//!
//! ```rust,no_run
//! use mobile::app::App;
//! use mobile::config::ClientConfig;
//! use mobile::services::{ApiClient, AuthFailureInterceptor, HttpOtpService, InMemoryAuth};
//! use std::sync::Arc;
//!
//! # async fn run() -> mobile::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let auth = Arc::new(InMemoryAuth::new());
//! let interceptor = AuthFailureInterceptor::new();
//! let api = Arc::new(ApiClient::new(&config, auth.clone(), interceptor.clone()));
//! let otp = Arc::new(HttpOtpService::new(api));
//!
//! let mut app = App::new(&config, auth, otp, interceptor);
//! app.mount();
//! app.go_profile();
//! app.go_edit_profile(None);
//! app.go_back();
//! app.unmount();
//! # Ok(())
//! # }
//! ```
//!
//! ## Related Modules
//!
//! - [`catalog`]: page identifiers and render-target lookup
//! - [`selection`]: typed cross-page slots
//! - [`state`]: navigation and auth-failure state
//! - [`otp`]: OTP entry state machine and session
//! - [`events`]: notifications for the render layer

pub mod catalog;
pub mod events;
mod handlers;
pub mod otp;
pub mod selection;
pub mod state;
mod tasks;
pub mod wishlist;

pub use catalog::{Page, PageCatalog};
pub use events::{AppEvent, EVENT_QUEUE_CAPACITY};
pub use otp::{OtpPhase, OtpSession, OtpSettings, OtpState};
pub use selection::{RegistrationId, SelectionStore, SessionId, SessionSelection, SlotKind, TicketSelection};
pub use state::{AppState, AuthFailurePhase, NavigationState};
pub use wishlist::WishlistSet;

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::{AuthService, OtpService};
use crate::services::interceptor::{AuthFailureHandler, AuthFailureInterceptor};
use async_channel::{bounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use shared::dto::conference::{Delegate, SessionEvent, Speaker};
use shared::dto::membership::{ConferencePaymentDraft, MembershipFormDraft, Payment};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handler registration of a mounted controller
struct Mounted {
    handler: Arc<dyn AuthFailureHandler>,
    attached: Arc<AtomicBool>,
}

/// Navigation controller.
///
/// Owns the state of one session. Call [`mount`](Self::mount) to start
/// receiving auth failures and [`unmount`](Self::unmount) (or drop the
/// controller) to stop; after unmount neither the interceptor nor a stale
/// copy of the handler can touch this controller's state.
pub struct App {
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
    auth: Arc<dyn AuthService>,
    otp_service: Arc<dyn OtpService>,
    interceptor: AuthFailureInterceptor,
    otp_settings: OtpSettings,
    mounted: Option<Mounted>,
    otp: Mutex<Option<OtpSession>>,
}

impl App {
    /// Create a controller on `Home` with empty slots and wishlist.
    pub fn new(
        config: &ClientConfig,
        auth: Arc<dyn AuthService>,
        otp_service: Arc<dyn OtpService>,
        interceptor: AuthFailureInterceptor,
    ) -> Self {
        let (event_tx, event_rx) = bounded(events::EVENT_QUEUE_CAPACITY);

        tracing::info!("Navigation controller created");

        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            event_tx,
            event_rx,
            auth,
            otp_service,
            interceptor,
            otp_settings: OtpSettings::from(config),
            mounted: None,
            otp: Mutex::new(None),
        }
    }

    /// Register this controller's auth-failure handler. Idempotent.
    pub fn mount(&mut self) {
        if self.mounted.is_some() {
            return;
        }

        let handler = handlers::auth::NavigationAuthHandler::new(
            &self.state,
            self.event_tx.clone(),
            Arc::clone(&self.auth),
        );
        let attached = handler.attachment();
        let handler: Arc<dyn AuthFailureHandler> = Arc::new(handler);

        // A failure abandoned by an earlier mount must not swallow new ones
        if self.state.write().release_auth_failure(None) {
            tracing::debug!("Cleared auth failure left pending by previous mount");
        }

        self.interceptor.register(Arc::clone(&handler));
        self.mounted = Some(Mounted { handler, attached });
        tracing::info!("Navigation controller mounted");
    }

    /// Detach the auth-failure handler and cancel any OTP countdown. Idempotent.
    pub fn unmount(&mut self) {
        self.close_otp();

        let Some(mounted) = self.mounted.take() else {
            return;
        };

        mounted.attached.store(false, Ordering::Release);
        if !self.interceptor.unregister(&mounted.handler) {
            tracing::warn!("Interceptor held another handler at unmount, leaving it in place");
        }
        tracing::info!("Navigation controller unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// The handler registered by [`mount`](Self::mount), if mounted
    pub fn auth_failure_handler(&self) -> Option<Arc<dyn AuthFailureHandler>> {
        self.mounted.as_ref().map(|m| Arc::clone(&m.handler))
    }

    // ---- Read side ----

    /// Shared read lock on the state. Drop it before calling any `go_*`.
    pub fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read()
    }

    /// Owned copy of the state for rendering without holding a lock
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    pub fn current_page(&self) -> Page {
        self.state.read().current_page()
    }

    pub fn previous_page(&self) -> Option<Page> {
        self.state.read().previous_page()
    }

    pub fn auth_failure_phase(&self) -> AuthFailurePhase {
        self.state.read().auth_failure()
    }

    /// Receiver for controller events; clones share one queue
    pub fn events(&self) -> Receiver<AppEvent> {
        self.event_rx.clone()
    }

    /// Take every event published so far
    pub fn drain_events(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    // ---- Payload transitions ----

    /// Carry the chosen ticket to the registration form
    pub fn go_conference_form(&self, selection: TicketSelection) {
        handlers::navigation::go_conference_form(self.state.clone(), self.event_tx.clone(), selection);
    }

    pub fn go_session_details(&self, event: &SessionEvent) {
        handlers::navigation::go_session_details(self.state.clone(), self.event_tx.clone(), event);
    }

    pub fn go_my_conference_session(&self, event: &SessionEvent) {
        handlers::navigation::go_my_conference_session(self.state.clone(), self.event_tx.clone(), event);
    }

    pub fn go_speaker_details(&self, speaker: Speaker) {
        handlers::navigation::go_speaker_details(self.state.clone(), self.event_tx.clone(), speaker);
    }

    pub fn go_delegate_details(&self, delegate: Delegate) {
        handlers::navigation::go_delegate_details(self.state.clone(), self.event_tx.clone(), delegate);
    }

    pub fn go_payment_details(&self, payment: Payment) {
        handlers::navigation::go_payment_details(self.state.clone(), self.event_tx.clone(), payment);
    }

    pub fn go_membership_payment(&self, draft: MembershipFormDraft) {
        handlers::navigation::go_membership_payment(self.state.clone(), self.event_tx.clone(), draft);
    }

    pub fn go_conference_payment(&self, draft: ConferencePaymentDraft) {
        handlers::navigation::go_conference_payment(self.state.clone(), self.event_tx.clone(), draft);
    }

    pub fn go_registration_details(&self, registration_id: impl Into<RegistrationId>) {
        handlers::navigation::go_registration_details(
            self.state.clone(),
            self.event_tx.clone(),
            registration_id.into(),
        );
    }

    // ---- Back-reference transitions ----

    /// Show the profile, remembering the page it was opened from
    pub fn go_profile(&self) {
        handlers::navigation::go_profile(self.state.clone(), self.event_tx.clone());
    }

    /// Show the edit screen. Back returns to `back_target`, or to the
    /// current page when `None`.
    pub fn go_edit_profile(&self, back_target: Option<Page>) {
        handlers::navigation::go_edit_profile(self.state.clone(), self.event_tx.clone(), back_target);
    }

    pub fn go_edit_profile_from_privacy_settings(&self) {
        self.go_edit_profile(Some(Page::PrivacySettings));
    }

    /// Go to the remembered page, or `Home`, and forget it. One hop only.
    pub fn go_back(&self) -> Page {
        handlers::navigation::go_back(self.state.clone(), self.event_tx.clone())
    }

    // ---- Wishlist ----

    /// Returns whether the session was newly added
    pub fn add_to_wishlist(&self, session_id: impl Into<SessionId>) -> bool {
        handlers::navigation::add_to_wishlist(self.state.clone(), self.event_tx.clone(), session_id.into())
    }

    /// Returns whether the session was present
    pub fn remove_from_wishlist(&self, session_id: &str) -> bool {
        handlers::navigation::remove_from_wishlist(self.state.clone(), self.event_tx.clone(), session_id)
    }

    pub fn is_wishlisted(&self, session_id: &str) -> bool {
        self.state.read().wishlist.contains(session_id)
    }

    pub fn wishlist(&self) -> WishlistSet {
        self.state.read().wishlist.clone()
    }

    // ---- Session ----

    /// Log out and show `Login`. A failing logout is logged and the
    /// redirect still happens.
    pub async fn handle_logout(&self) {
        self.close_otp();
        handlers::auth::handle_logout(self.state.clone(), self.event_tx.clone(), Arc::clone(&self.auth)).await;
    }

    // ---- OTP ----

    /// Open OTP entry for `destination`, replacing any open entry, and send
    /// the first code.
    pub async fn open_otp(&self, destination: &str) -> Result<OtpSession> {
        self.close_otp();

        let session = OtpSession::open(
            destination,
            Arc::clone(&self.otp_service),
            self.event_tx.clone(),
            self.otp_settings,
        )
        .await?;

        if let Some(previous) = self.otp.lock().replace(session.clone()) {
            // Opened concurrently by another caller; last one wins
            previous.close();
        }
        Ok(session)
    }

    /// The open OTP entry, if any
    pub fn otp(&self) -> Option<OtpSession> {
        self.otp.lock().clone()
    }

    /// Close the open OTP entry and cancel its countdown
    pub fn close_otp(&self) {
        if let Some(session) = self.otp.lock().take() {
            session.close();
        }
    }
}

/// One no-argument method per payload-free destination.
macro_rules! page_transitions {
    ($($method:ident => $page:ident),* $(,)?) => {
        impl App {
            $(
                #[doc = concat!("Show [`Page::", stringify!($page), "`]")]
                pub fn $method(&self) {
                    handlers::navigation::go_to(self.state.clone(), self.event_tx.clone(), Page::$page);
                }
            )*
        }
    };
}

page_transitions! {
    go_home => Home,
    go_login => Login,
    go_register => Register,
    go_forgot_password => ForgotPassword,
    go_reset_password => ResetPassword,
    go_otp_verification => OtpVerification,
    go_board => Board,
    go_about_us => AboutUs,
    go_contact_us => ContactUs,
    go_news => News,
    go_news_details => NewsDetails,
    go_events => Events,
    go_gallery => Gallery,
    go_conference => Conference,
    go_conference_details => ConferenceDetails,
    go_payment_success => PaymentSuccess,
    go_payment_failure => PaymentFailure,
    go_sessions => Sessions,
    go_my_conference => MyConference,
    go_speakers => Speakers,
    go_delegates => Delegates,
    go_sponsors => Sponsors,
    go_exhibitors => Exhibitors,
    go_membership => Membership,
    go_membership_form => MembershipForm,
    go_membership_card => MembershipCard,
    go_change_password => ChangePassword,
    go_privacy_settings => PrivacySettings,
    go_privacy_policy => PrivacyPolicy,
    go_terms => Terms,
    go_notifications => Notifications,
    go_payments => Payments,
    go_registrations => Registrations,
    go_certificates => Certificates,
    go_feedback => Feedback,
    go_faq => Faq,
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::OtpDispatch;
    use crate::services::auth::InMemoryAuth;
    use async_trait::async_trait;
    use shared::dto::conference::Ticket;
    use shared::dto::membership::PaymentStatus;
    use std::collections::BTreeSet;

    struct NoOtp;

    #[async_trait]
    impl OtpService for NoOtp {
        async fn send_code(&self, _destination: &str) -> Result<OtpDispatch> {
            Ok(OtpDispatch { expiry_minutes: 1 })
        }

        async fn verify_code(&self, _destination: &str, _code: &str) -> Result<bool> {
            Ok(false)
        }
    }

    fn app() -> App {
        App::new(
            &ClientConfig::default(),
            Arc::new(InMemoryAuth::new()),
            Arc::new(NoOtp),
            AuthFailureInterceptor::new(),
        )
    }

    fn step(go: impl Fn(&App) + 'static, target: Page) -> (Box<dyn Fn(&App)>, Page) {
        (Box::new(go), target)
    }

    fn session_event(id: &str) -> SessionEvent {
        SessionEvent {
            id: id.to_string(),
            title: Some("Opening keynote".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.current_page(), Page::Home);
        assert_eq!(app.previous_page(), None);
        assert!(app.wishlist().is_empty());
        assert_eq!(app.auth_failure_phase(), AuthFailurePhase::Idle);
    }

    #[test]
    fn test_every_transition_lands_on_its_target() {
        let app = app();
        let payment = Payment {
            id: "pay-1".to_string(),
            amount: 150.0,
            currency: "INR".to_string(),
            status: PaymentStatus::Completed,
            paid_at: None,
            reference: None,
        };

        let transitions = vec![
            step(App::go_home, Page::Home),
            step(App::go_login, Page::Login),
            step(App::go_register, Page::Register),
            step(App::go_forgot_password, Page::ForgotPassword),
            step(App::go_reset_password, Page::ResetPassword),
            step(App::go_otp_verification, Page::OtpVerification),
            step(App::go_board, Page::Board),
            step(App::go_about_us, Page::AboutUs),
            step(App::go_contact_us, Page::ContactUs),
            step(App::go_news, Page::News),
            step(App::go_news_details, Page::NewsDetails),
            step(App::go_events, Page::Events),
            step(App::go_gallery, Page::Gallery),
            step(App::go_conference, Page::Conference),
            step(App::go_conference_details, Page::ConferenceDetails),
            step(|a: &App| a.go_conference_form(TicketSelection::default()), Page::ConferenceForm),
            step(|a: &App| a.go_conference_payment(ConferencePaymentDraft::default()), Page::ConferencePayment),
            step(App::go_payment_success, Page::PaymentSuccess),
            step(App::go_payment_failure, Page::PaymentFailure),
            step(App::go_sessions, Page::Sessions),
            step(|a: &App| a.go_session_details(&session_event("s1")), Page::SessionDetails),
            step(App::go_my_conference, Page::MyConference),
            step(|a: &App| a.go_my_conference_session(&session_event("s2")), Page::MyConferenceSession),
            step(App::go_speakers, Page::Speakers),
            step(|a: &App| a.go_speaker_details(Speaker::default()), Page::SpeakerDetails),
            step(App::go_delegates, Page::Delegates),
            step(|a: &App| a.go_delegate_details(Delegate::default()), Page::DelegateDetails),
            step(App::go_sponsors, Page::Sponsors),
            step(App::go_exhibitors, Page::Exhibitors),
            step(App::go_membership, Page::Membership),
            step(App::go_membership_form, Page::MembershipForm),
            step(|a: &App| a.go_membership_payment(MembershipFormDraft::default()), Page::MembershipPayment),
            step(App::go_membership_card, Page::MembershipCard),
            step(App::go_profile, Page::Profile),
            step(|a: &App| a.go_edit_profile(None), Page::EditProfile),
            step(App::go_change_password, Page::ChangePassword),
            step(App::go_privacy_settings, Page::PrivacySettings),
            step(App::go_privacy_policy, Page::PrivacyPolicy),
            step(App::go_terms, Page::Terms),
            step(App::go_notifications, Page::Notifications),
            step(App::go_payments, Page::Payments),
            step(move |a: &App| a.go_payment_details(payment.clone()), Page::PaymentDetails),
            step(App::go_registrations, Page::Registrations),
            step(|a: &App| a.go_registration_details("reg-9"), Page::RegistrationDetails),
            step(App::go_certificates, Page::Certificates),
            step(App::go_feedback, Page::Feedback),
            step(App::go_faq, Page::Faq),
        ];

        let mut covered = BTreeSet::new();
        for (go, target) in &transitions {
            go(&app);
            assert_eq!(app.current_page(), *target, "transition to {} landed elsewhere", target);
            covered.insert(*target);
        }

        let every_page: BTreeSet<Page> = Page::all().iter().copied().collect();
        assert_eq!(covered, every_page);
    }

    #[test]
    fn test_conference_form_scenario() {
        let app = app();
        app.go_conference_form(TicketSelection {
            category_name: Some("Early Bird".to_string()),
            ticket: Some(Ticket {
                id: 7,
                name: "Standard".to_string(),
                price: None,
            }),
            module_name: Some("Non-Residential".to_string()),
            is_residential: Some(false),
            membership_type: Some("member".to_string()),
            event_id: Some(1),
            module_id: Some(2),
            category_id: Some(3),
        });

        let state = app.read();
        assert_eq!(state.current_page(), Page::ConferenceForm);
        let ticket = state.selections().ticket().unwrap();
        assert_eq!(ticket.category_name.as_deref(), Some("Early Bird"));
        assert_eq!(ticket.ticket.as_ref().map(|t| (t.id, t.name.as_str())), Some((7, "Standard")));
        assert_eq!(ticket.module_name.as_deref(), Some("Non-Residential"));
        assert_eq!(ticket.is_residential, Some(false));
        assert_eq!(ticket.membership_type.as_deref(), Some("member"));
        assert_eq!((ticket.event_id, ticket.module_id, ticket.category_id), (Some(1), Some(2), Some(3)));
    }

    #[test]
    fn test_profile_then_edit_remembers_profile() {
        let app = app();
        app.go_profile();
        assert_eq!(app.previous_page(), Some(Page::Home));

        app.go_edit_profile(None);
        assert_eq!(app.current_page(), Page::EditProfile);
        assert_eq!(app.previous_page(), Some(Page::Profile));

        assert_eq!(app.go_back(), Page::Profile);
        assert_eq!(app.current_page(), Page::Profile);
        assert_eq!(app.previous_page(), None);
    }

    #[test]
    fn test_edit_from_privacy_settings_returns_there() {
        let app = app();
        app.go_privacy_settings();
        app.go_edit_profile_from_privacy_settings();
        assert_eq!(app.previous_page(), Some(Page::PrivacySettings));
        assert_eq!(app.go_back(), Page::PrivacySettings);
    }

    #[test]
    fn test_previous_is_never_edit_profile() {
        let app = app();
        app.go_edit_profile(None);
        app.go_edit_profile(None);
        assert_ne!(app.previous_page(), Some(Page::EditProfile));

        app.go_profile();
        assert_ne!(app.previous_page(), Some(Page::EditProfile));
        app.go_edit_profile(Some(Page::EditProfile));
        assert_ne!(app.previous_page(), Some(Page::EditProfile));
    }

    #[test]
    fn test_back_is_one_hop() {
        let app = app();
        app.go_board();
        app.go_profile();
        assert_eq!(app.go_back(), Page::Board);
        assert_eq!(app.go_back(), Page::Home);
    }

    #[test]
    fn test_plain_transitions_leave_previous_alone() {
        let app = app();
        app.go_profile();
        app.go_news();
        app.go_faq();
        assert_eq!(app.previous_page(), Some(Page::Home));
    }

    #[test]
    fn test_session_details_keeps_only_id() {
        let app = app();
        app.go_session_details(&session_event("42"));
        let snapshot = app.snapshot();
        assert_eq!(
            snapshot.selections().session(),
            Some(&SessionSelection {
                session_id: "42".to_string()
            })
        );
        assert!(snapshot.selections().my_conference_session().is_none());
    }

    #[test]
    fn test_wishlist_idempotent() {
        let app = app();
        assert!(app.add_to_wishlist("s1"));
        assert!(!app.add_to_wishlist("s1"));
        assert_eq!(app.wishlist().len(), 1);

        assert!(app.remove_from_wishlist("s1"));
        assert!(!app.remove_from_wishlist("s1"));
        assert!(!app.is_wishlisted("s1"));

        let changes: Vec<_> = app
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, AppEvent::WishlistChanged { .. }))
            .collect();
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let app = app();
        for _ in 0..(EVENT_QUEUE_CAPACITY * 4) {
            app.go_news();
            app.go_faq();
        }

        // Navigation keeps working once the queue is full
        assert_eq!(app.current_page(), Page::Faq);
        let events = app.drain_events();
        assert_eq!(events.len(), EVENT_QUEUE_CAPACITY);
        assert_eq!(
            events[0],
            AppEvent::PageChanged {
                from: Page::Home,
                to: Page::News
            }
        );

        app.go_home();
        assert_eq!(app.drain_events().len(), 1);
    }

    #[test]
    fn test_page_changed_events() {
        let app = app();
        app.go_news();
        app.go_faq();
        assert_eq!(
            app.drain_events(),
            vec![
                AppEvent::PageChanged {
                    from: Page::Home,
                    to: Page::News
                },
                AppEvent::PageChanged {
                    from: Page::News,
                    to: Page::Faq
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_logout_clears_selections_keeps_wishlist() {
        let app = app();
        app.add_to_wishlist("s1");
        app.go_speaker_details(Speaker::default());
        app.handle_logout().await;

        let state = app.snapshot();
        assert_eq!(state.current_page(), Page::Login);
        assert!(!state.selections().is_filled(SlotKind::Speaker));
        assert!(state.wishlist().contains("s1"));
    }

    #[test]
    fn test_mount_unmount() {
        let interceptor = AuthFailureInterceptor::new();
        let mut app = App::new(
            &ClientConfig::default(),
            Arc::new(InMemoryAuth::new()),
            Arc::new(NoOtp),
            interceptor.clone(),
        );

        app.mount();
        app.mount();
        assert!(app.is_mounted());
        assert!(interceptor.is_registered());

        app.unmount();
        app.unmount();
        assert!(!app.is_mounted());
        assert!(!interceptor.is_registered());
    }

    #[test]
    fn test_drop_unregisters() {
        let interceptor = AuthFailureInterceptor::new();
        {
            let mut app = App::new(
                &ClientConfig::default(),
                Arc::new(InMemoryAuth::new()),
                Arc::new(NoOtp),
                interceptor.clone(),
            );
            app.mount();
            assert!(interceptor.is_registered());
        }
        assert!(!interceptor.is_registered());
    }
}
