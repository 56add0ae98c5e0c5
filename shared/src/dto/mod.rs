//! # Data Transfer Objects (DTOs)
//!
//! Data structures received from (or sent to) the conference backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - API error bodies and OTP DTOs
//! - [`conference`] - Tickets, session events, speakers and delegates
//! - [`membership`] - Membership and payment drafts
//!
//! ## Example JSON
//!
//! ```text
//! GET /api/sessions/42
//!
//! {
//!   "id": 42,
//!   "title": "Opening Keynote",
//!   "startsAt": "2026-03-02T09:00:00Z",
//!   "venue": "Hall A"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! WWW-Authenticate: Bearer error="invalid_token"
//!
//! { "code": "token_expired", "message": "Session has expired" }
//! ```

pub mod auth;
pub mod conference;
pub mod membership;

pub use auth::*;
pub use conference::*;
pub use membership::*;
