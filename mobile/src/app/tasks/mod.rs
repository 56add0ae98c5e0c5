//! # Background Tasks
//!
//! Long-running tasks spawned by the controller.

pub mod otp_timer;
