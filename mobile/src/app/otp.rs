//! # OTP Entry
//!
//! State machine around entering a one-time code:
//!
//! ```text
//! NotSent ──visible──> Sending ──sent──> Sent(countdown) ──0s──> Expired
//!    ^                    │                 │    ^                  │
//!    └────send failed─────┘                 │    └──── resend ──────┘
//!                                           └─ verifying (overlay)
//! ```
//!
//! [`OtpState`] is pure: every operation takes `now`, so it is tested without
//! a clock. [`OtpSession`] drives it against an [`OtpService`] and runs the
//! one-second countdown task.

use crate::app::events::AppEvent;
use crate::app::tasks::otp_timer;
use crate::core::error::{AppError, Result};
use crate::core::service::OtpService;
use crate::utils::validation::{validate_destination, validate_otp_code};
use async_channel::Sender;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Delivery phase of the code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPhase {
    NotSent,
    Sending,
    Sent { sent_at: Instant, expires_at: Instant },
    Expired,
}

/// Result of advancing the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown moved to this many whole seconds
    Remaining(u64),
    /// Still counting, same whole second as last tick
    Unchanged,
    /// Reached zero on this tick
    Expired,
    /// Nothing to count: closed, expired, or no code sent
    Stopped,
}

#[derive(Debug, Clone)]
pub struct OtpState {
    phase: OtpPhase,
    verifying: bool,
    verified: bool,
    send_failed: bool,
    closed: bool,
    remaining_secs: u64,
    error: Option<String>,
    cooldown: Duration,
}

impl OtpState {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            phase: OtpPhase::NotSent,
            verifying: false,
            verified: false,
            send_failed: false,
            closed: false,
            remaining_secs: 0,
            error: None,
            cooldown,
        }
    }

    pub fn phase(&self) -> OtpPhase {
        self.phase
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Inline error for the entry field
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Entry became visible. Returns whether a first send should start.
    pub fn on_visible(&mut self) -> bool {
        if self.closed || self.send_failed || self.phase != OtpPhase::NotSent {
            return false;
        }
        self.phase = OtpPhase::Sending;
        true
    }

    /// Expired, past the cooldown of an active code, or retrying a failed send.
    pub fn can_resend(&self, now: Instant) -> bool {
        if self.closed || self.verifying || self.verified {
            return false;
        }
        match self.phase {
            OtpPhase::Expired => true,
            OtpPhase::Sent { sent_at, expires_at } => {
                now >= expires_at || now.saturating_duration_since(sent_at) > self.cooldown
            }
            OtpPhase::NotSent => self.send_failed,
            OtpPhase::Sending => false,
        }
    }

    pub fn begin_resend(&mut self, now: Instant) -> Result<()> {
        if self.closed {
            return Err(AppError::State("OTP entry is closed".to_string()));
        }
        if !self.can_resend(now) {
            return Err(AppError::Otp("A new code can't be requested yet".to_string()));
        }
        self.phase = OtpPhase::Sending;
        self.error = None;
        Ok(())
    }

    pub fn on_sent(&mut self, now: Instant, expiry: Duration) {
        if self.closed {
            return;
        }
        self.phase = OtpPhase::Sent {
            sent_at: now,
            expires_at: now + expiry,
        };
        self.remaining_secs = whole_secs_ceil(expiry);
        self.send_failed = false;
        self.error = None;
    }

    pub fn on_send_failed(&mut self, message: impl Into<String>) {
        if self.closed {
            return;
        }
        self.phase = OtpPhase::NotSent;
        self.send_failed = true;
        self.error = Some(message.into());
    }

    /// Recompute the remaining time from the absolute expiry.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.closed {
            return TickOutcome::Stopped;
        }
        let OtpPhase::Sent { expires_at, .. } = self.phase else {
            return TickOutcome::Stopped;
        };

        let remaining = whole_secs_ceil(expires_at.saturating_duration_since(now));
        if remaining == 0 {
            self.phase = OtpPhase::Expired;
            self.remaining_secs = 0;
            return TickOutcome::Expired;
        }
        if remaining == self.remaining_secs {
            return TickOutcome::Unchanged;
        }
        self.remaining_secs = remaining;
        TickOutcome::Remaining(remaining)
    }

    /// Check a code before it goes to the server.
    ///
    /// Format is checked first; a malformed code sets the inline error and
    /// leaves the phase alone.
    pub fn begin_verify(&mut self, code: &str, now: Instant) -> Result<()> {
        if let Err(e) = validate_otp_code(code).into_result() {
            self.error = Some(e.to_string());
            return Err(e);
        }
        if self.closed {
            return Err(AppError::State("OTP entry is closed".to_string()));
        }
        if self.verified {
            return Err(AppError::State("Code already verified".to_string()));
        }
        if self.verifying {
            return Err(AppError::Otp("Verification already in progress".to_string()));
        }
        match self.phase {
            OtpPhase::Sent { expires_at, .. } if now < expires_at => {}
            OtpPhase::Sent { .. } | OtpPhase::Expired => {
                let message = "Code expired, request a new one".to_string();
                self.error = Some(message.clone());
                return Err(AppError::Otp(message));
            }
            OtpPhase::NotSent | OtpPhase::Sending => {
                return Err(AppError::Otp("No code has been sent".to_string()));
            }
        }

        self.verifying = true;
        self.error = None;
        Ok(())
    }

    /// Settle a verify attempt. A rejection keeps the code active.
    pub fn on_verify_result(&mut self, result: &Result<bool>) {
        self.verifying = false;
        if self.closed {
            return;
        }
        match result {
            Ok(true) => {
                self.verified = true;
                self.error = None;
            }
            Ok(false) => self.error = Some("Invalid code".to_string()),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
        self.verifying = false;
    }
}

fn whole_secs_ceil(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}

/// Settings an [`OtpSession`] needs from the client configuration
#[derive(Debug, Clone, Copy)]
pub struct OtpSettings {
    pub resend_cooldown: Duration,
    /// Used when the server reports an expiry of zero minutes; at least one minute
    pub default_expiry: Duration,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            resend_cooldown: Duration::from_secs(60),
            default_expiry: Duration::from_secs(10 * 60),
        }
    }
}

impl From<&crate::config::ClientConfig> for OtpSettings {
    fn from(config: &crate::config::ClientConfig) -> Self {
        Self {
            resend_cooldown: Duration::from_secs(config.otp_resend_cooldown_secs),
            default_expiry: Duration::from_secs(u64::from(config.otp_expiry_minutes.max(1)) * 60),
        }
    }
}

struct OtpInner {
    destination: String,
    service: Arc<dyn OtpService>,
    event_tx: Sender<AppEvent>,
    settings: OtpSettings,
    state: Arc<Mutex<OtpState>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl OtpInner {
    fn stop_ticker(&self) {
        if let Some(handle) = self.ticker.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for OtpInner {
    fn drop(&mut self) {
        if let Some(handle) = self.ticker.get_mut().take() {
            handle.abort();
        }
    }
}

/// One OTP entry, from first send to close.
///
/// Clones share the same entry. The countdown is cancelled on
/// [`close`](Self::close) and when the last clone is dropped.
#[derive(Clone)]
pub struct OtpSession {
    inner: Arc<OtpInner>,
}

impl OtpSession {
    /// Open an entry for `destination` and send the first code.
    ///
    /// A failed first send is reported inline (see [`OtpState::error`]) and
    /// can be retried with [`resend`](Self::resend).
    #[tracing::instrument(skip(service, event_tx, settings))]
    pub async fn open(
        destination: &str,
        service: Arc<dyn OtpService>,
        event_tx: Sender<AppEvent>,
        settings: OtpSettings,
    ) -> Result<Self> {
        validate_destination(destination).into_result()?;

        let session = Self {
            inner: Arc::new(OtpInner {
                destination: destination.trim().to_string(),
                service,
                event_tx,
                settings,
                state: Arc::new(Mutex::new(OtpState::new(settings.resend_cooldown))),
                ticker: Mutex::new(None),
            }),
        };

        let should_send = session.inner.state.lock().on_visible();
        if should_send {
            if let Err(e) = session.dispatch().await {
                tracing::warn!(error = %e, "First OTP send failed");
            }
        }
        Ok(session)
    }

    pub fn destination(&self) -> &str {
        &self.inner.destination
    }

    /// Copy of the current state for rendering
    pub fn snapshot(&self) -> OtpState {
        self.inner.state.lock().clone()
    }

    pub fn can_resend(&self) -> bool {
        self.inner.state.lock().can_resend(Instant::now())
    }

    /// Request a new code
    pub async fn resend(&self) -> Result<()> {
        self.inner.state.lock().begin_resend(Instant::now())?;
        tracing::info!(destination = %self.inner.destination, "Resending OTP");
        self.dispatch().await
    }

    /// Check `code` with the server. Returns whether it was accepted.
    pub async fn verify(&self, code: &str) -> Result<bool> {
        self.inner.state.lock().begin_verify(code, Instant::now())?;

        let result = self.inner.service.verify_code(&self.inner.destination, code).await;

        {
            let mut state = self.inner.state.lock();
            if state.is_closed() {
                return Err(AppError::State("OTP entry closed during verification".to_string()));
            }
            state.on_verify_result(&result);
        }

        if let Ok(true) = result {
            tracing::info!(destination = %self.inner.destination, "OTP verified");
            self.inner.stop_ticker();
        }
        result
    }

    /// Close the entry and cancel the countdown. Idempotent.
    pub fn close(&self) {
        self.inner.state.lock().close();
        self.inner.stop_ticker();
        tracing::debug!(destination = %self.inner.destination, "OTP entry closed");
    }

    pub fn is_closed(&self) -> bool {
        self.inner.state.lock().is_closed()
    }

    async fn dispatch(&self) -> Result<()> {
        let result = self.inner.service.send_code(&self.inner.destination).await;
        let now = Instant::now();

        let mut state = self.inner.state.lock();
        if state.is_closed() {
            return Err(AppError::State("OTP entry closed during send".to_string()));
        }

        match result {
            Ok(dispatch) => {
                let expiry = match dispatch.expiry_minutes {
                    0 => self.inner.settings.default_expiry,
                    minutes => Duration::from_secs(u64::from(minutes) * 60),
                };
                state.on_sent(now, expiry);
                drop(state);
                tracing::info!(expiry_secs = expiry.as_secs(), "OTP countdown started");
                self.restart_ticker();
                Ok(())
            }
            Err(e) => {
                state.on_send_failed(e.to_string());
                Err(e)
            }
        }
    }

    fn restart_ticker(&self) {
        let handle = otp_timer::spawn_countdown(Arc::downgrade(&self.inner.state), self.inner.event_tx.clone());
        if let Some(previous) = self.inner.ticker.lock().replace(handle) {
            previous.abort();
        }
    }
}
