//! File-based logging initialization

use super::config::DebugConfig;
use crate::core::error::{AppError, Result};
use once_cell::sync::OnceCell;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Flushes buffered log lines on process exit; must outlive the subscriber.
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialize logging from environment variables.
pub fn init() -> Result<()> {
    init_with(&DebugConfig::from_env())
}

/// Initialize the logging system
///
/// Sets up:
/// - Daily rotated log file under `config.log_dir`
/// - Optional stderr output for development
/// - Non-blocking writes so logging never stalls a transition
/// - Panic hook that records panics in the log
///
/// Fails if a global subscriber is already installed.
pub fn init_with(config: &DebugConfig) -> Result<()> {
    fs::create_dir_all(&config.log_dir).map_err(|e| {
        AppError::Config(format!(
            "Failed to create log directory {}: {}",
            config.log_dir.display(),
            e
        ))
    })?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let stderr_layer = config.log_to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Logging already initialized: {}", e)))?;

    // A second successful init is impossible, so the slot is always empty here
    let _ = FILE_GUARD.set(guard);

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.log_to_stderr,
        "Logging initialized"
    );

    setup_panic_hook();
    Ok(())
}

/// Log panics with their location before running the default hook
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
