//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the mobile client core and the
//! conference backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: API error bodies and OTP request/response DTOs
//!   - **[`dto::conference`]**: Tickets, session events, speakers, delegates
//!   - **[`dto::membership`]**: Membership form drafts, conference payment drafts, payments
//! - **[`utils`]**: Shared serde helpers
//!   - **[`utils::string_or_number`]**: Accept identifiers sent as either JSON strings or numbers
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust; the backend sends **camelCase**, so every
//!   struct carries `#[serde(rename_all = "camelCase")]`
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::conference::SessionEvent;
//!
//! let event: SessionEvent = serde_json::from_str(r#"{"id": 42, "title": "Keynote"}"#).unwrap();
//! assert_eq!(event.id, "42");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
