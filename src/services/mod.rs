//! External service integration module
//!
//! This module contains the desktop notification delivery functions. All of
//! them are fire-and-forget from the timer's point of view: failures are
//! reported to the caller for logging and never reach the state machine.

pub mod notify;

// Re-export main functions
pub use notify::*;
