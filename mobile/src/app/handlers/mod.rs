//! # Event Handlers
//!
//! Handlers organized by domain. [`crate::app::App`] delegates to these.

pub mod auth;
pub mod navigation;
