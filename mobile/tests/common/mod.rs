//! # Test Collaborators
//!
//! Mock auth and OTP services shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use mobile::core::service::{AuthService, OtpDispatch, OtpService};
use mobile::services::AuthFailureInterceptor;
use mobile::{App, AppError, AppEvent, ClientConfig, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// How the mock logout settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    Succeed,
    Fail,
    Panic,
}

/// Auth collaborator that records its side effects in order.
pub struct RecordingAuth {
    authenticated: AtomicBool,
    outcome: Mutex<LogoutOutcome>,
    logout_calls: AtomicUsize,
    effects: Mutex<Vec<&'static str>>,
    /// Set to hold logout open until `release_logout` is called
    gate: Option<Arc<Notify>>,
    logout_started: Arc<Notify>,
}

impl RecordingAuth {
    pub fn authenticated() -> Self {
        Self::build(true, None)
    }

    pub fn anonymous() -> Self {
        Self::build(false, None)
    }

    /// Authenticated, with logout blocked until [`release_logout`](Self::release_logout)
    pub fn gated() -> Self {
        Self::build(true, Some(Arc::new(Notify::new())))
    }

    fn build(authenticated: bool, gate: Option<Arc<Notify>>) -> Self {
        Self {
            authenticated: AtomicBool::new(authenticated),
            outcome: Mutex::new(LogoutOutcome::Succeed),
            logout_calls: AtomicUsize::new(0),
            effects: Mutex::new(Vec::new()),
            gate,
            logout_started: Arc::new(Notify::new()),
        }
    }

    pub fn with_outcome(self, outcome: LogoutOutcome) -> Self {
        *self.outcome.lock() = outcome;
        self
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    pub fn effects(&self) -> Vec<&'static str> {
        self.effects.lock().clone()
    }

    /// Resolves once a logout call has started
    pub async fn wait_logout_started(&self) {
        self.logout_started.notified().await;
    }

    pub fn release_logout(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }
}

#[async_trait]
impl AuthService for RecordingAuth {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    fn access_token(&self) -> Option<String> {
        self.is_authenticated().then(|| "test-token".to_string())
    }

    async fn logout(&self) -> Result<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.effects.lock().push("logout:start");
        self.logout_started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let outcome = *self.outcome.lock();
        match outcome {
            LogoutOutcome::Succeed => {
                self.authenticated.store(false, Ordering::SeqCst);
                self.effects.lock().push("logout:done");
                Ok(())
            }
            LogoutOutcome::Fail => {
                self.effects.lock().push("logout:failed");
                Err(AppError::Auth("credential store unavailable".to_string()))
            }
            LogoutOutcome::Panic => panic!("credential store poisoned"),
        }
    }
}

/// OTP collaborator with scripted answers.
pub struct MockOtp {
    expiry_minutes: u32,
    accepted_code: String,
    fail_send: AtomicBool,
    sends: AtomicUsize,
    verifies: AtomicUsize,
}

impl MockOtp {
    pub fn new(expiry_minutes: u32) -> Self {
        Self {
            expiry_minutes,
            accepted_code: "246810".to_string(),
            fail_send: AtomicBool::new(false),
            sends: AtomicUsize::new(0),
            verifies: AtomicUsize::new(0),
        }
    }

    pub fn accepted_code(&self) -> &str {
        &self.accepted_code
    }

    pub fn set_fail_send(&self, fail: bool) {
        self.fail_send.store(fail, Ordering::SeqCst);
    }

    pub fn sends(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    pub fn verifies(&self) -> usize {
        self.verifies.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OtpService for MockOtp {
    async fn send_code(&self, _destination: &str) -> Result<OtpDispatch> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(AppError::Otp("SMS gateway unavailable".to_string()));
        }
        Ok(OtpDispatch {
            expiry_minutes: self.expiry_minutes,
        })
    }

    async fn verify_code(&self, _destination: &str, code: &str) -> Result<bool> {
        self.verifies.fetch_add(1, Ordering::SeqCst);
        Ok(code == self.accepted_code)
    }
}

/// Mounted controller wired to the given collaborators
pub fn mounted_app(
    auth: Arc<RecordingAuth>,
    otp: Arc<MockOtp>,
    interceptor: &AuthFailureInterceptor,
) -> App {
    let mut app = App::new(&ClientConfig::default(), auth, otp, interceptor.clone());
    app.mount();
    app
}

/// Advance the paused clock one second at a time, letting the ticker run
pub async fn advance_secs(secs: u64) {
    for _ in 0..secs {
        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
    }
}

/// Remaining-seconds values of the OTP ticks in `events`
pub fn otp_ticks(events: &[AppEvent]) -> Vec<u64> {
    events
        .iter()
        .filter_map(|event| match event {
            AppEvent::OtpTick { remaining_secs } => Some(*remaining_secs),
            _ => None,
        })
        .collect()
}
