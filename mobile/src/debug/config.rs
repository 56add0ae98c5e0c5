//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// File name prefix of the rotated log
    pub log_file_name: String,
    /// Log level filter (e.g., "mobile=debug,info")
    pub log_level: String,
    /// Also write human-readable output to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "mobile.log".to_string(),
            log_level: default_level().to_string(),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_dir: std::env::var("CONFERENCE_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file_name: defaults.log_file_name,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: std::env::var("CONFERENCE_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(cfg!(feature = "debug-mode")),
        }
    }

    /// Take directory and level from the client configuration
    pub fn from_client_config(config: &crate::config::ClientConfig) -> Self {
        Self {
            log_dir: PathBuf::from(&config.log_dir),
            log_level: config.log_level.clone(),
            ..Self::from_env()
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.is_trace_enabled()
    }

    /// Check if trace logging is enabled
    pub fn is_trace_enabled(&self) -> bool {
        self.log_level.contains("trace")
    }
}

fn default_level() -> &'static str {
    if cfg!(feature = "debug-mode") {
        "mobile=debug,info"
    } else {
        crate::config::DEFAULT_LOG_LEVEL
    }
}
