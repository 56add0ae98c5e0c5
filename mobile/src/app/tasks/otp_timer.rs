//! # OTP Countdown Task
//!
//! One-second ticker that advances an [`OtpState`] and publishes the
//! remaining time. Remaining time is recomputed from the absolute expiry on
//! every tick, so a late or skipped tick never makes the countdown drift.

use crate::app::events::{publish, AppEvent};
use crate::app::otp::{OtpState, TickOutcome};
use async_channel::Sender;
use parking_lot::Mutex;
use std::sync::Weak;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

const TICK: Duration = Duration::from_secs(1);

/// Spawn the countdown for `state`.
///
/// The task stops on its own when the code expires, when the state is
/// closed, or when the session owning the state is dropped. Closing a
/// session also aborts the returned handle.
pub(crate) fn spawn_countdown(state: Weak<Mutex<OtpState>>, event_tx: Sender<AppEvent>) -> JoinHandle<()> {
    // Anchored at spawn time, not at the task's first poll
    let first_tick = Instant::now() + TICK;

    crate::debug::spawn_tracked("otp_countdown", async move {
        let mut ticker = interval_at(first_tick, TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let Some(state) = state.upgrade() else {
                tracing::debug!("OTP session dropped, countdown stopped");
                break;
            };
            let outcome = state.lock().tick(Instant::now());

            match outcome {
                TickOutcome::Remaining(remaining_secs) => {
                    tracing::trace!(remaining_secs, "OTP countdown");
                    publish(&event_tx, AppEvent::OtpTick { remaining_secs });
                }
                TickOutcome::Unchanged => {}
                TickOutcome::Expired => {
                    tracing::info!("OTP expired");
                    publish(&event_tx, AppEvent::OtpTick { remaining_secs: 0 });
                    publish(&event_tx, AppEvent::OtpExpired);
                    break;
                }
                TickOutcome::Stopped => {
                    tracing::debug!("OTP countdown stopped");
                    break;
                }
            }
        }
    })
}
