//! # Logging and Task Tracking
//!
//! - **File-based logging**: structured logs to `logs/mobile.log` (daily rotation)
//! - **Async task tracking**: lifecycle logging for background tasks such as
//!   the OTP countdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! mobile::debug::init()?;
//!
//! tracing::info!(page = "home", "Controller mounted");
//! # Ok::<(), mobile::AppError>(())
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `mobile=debug,info`)
//! - `CONFERENCE_LOG_DIR`: Log directory (default: `logs`)
//! - `CONFERENCE_LOG_STDERR`: Also log to stderr (1=on, 0=off)

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::DebugConfig;
pub use logger::{init, init_with};
pub use task_tracker::{active_task_count, spawn_tracked};

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
