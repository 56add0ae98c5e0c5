//! # Conference Client Core - Library Root
//!
//! Navigation and session-state core of the conference membership mobile
//! client. Screens call into this crate to move between pages and carry
//! selections; the HTTP layer calls into it when a request is rejected for
//! its credential.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              mobile (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - App controller, pages, slots, OTP entry  │
//! │  services   - ApiClient, interceptor, InMemoryAuth     │
//! │  core       - AppError, AuthService, OtpService        │
//! │  config     - ClientConfig (env / JSON)                │
//! │  debug      - tracing setup, tracked tasks             │
//! │  utils      - input validation                         │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (reqwest)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: the [`App`] controller
//!   - one transition per page, applied atomically under one write lock
//!   - single remembered page for back navigation
//!   - typed selection slots and the session wishlist
//!   - auth-failure redirect (`Login` or `Home`) and OTP countdown
//!
//! - **services**: edge collaborators
//!   - `api`: backend HTTP client and 401 classification
//!   - `interceptor`: where the HTTP layer reports auth failures
//!   - `auth`: in-memory session holder
//!
//! - **core**: error types and collaborator traits
//! - **config**: client configuration
//! - **debug**: logging initialization and task tracking
//! - **utils**: validation helpers
//!
//! ## Shared Crate
//!
//! Payload types (tickets, sessions, speakers, payments, OTP requests) come
//! from the workspace `shared` crate.
//!
//! ## Logging
//!
//! Call [`debug::init`] once at startup. Log level comes from `RUST_LOG`
//! (default `mobile=info,warn`); logs rotate daily under `logs/`.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use app::{App, AppEvent, AppState, Page};
pub use config::ClientConfig;
pub use core::{AppError, Result};
