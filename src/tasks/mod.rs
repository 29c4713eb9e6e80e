//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server:
//! the 1 Hz tick source and the notification delivery loop.

pub mod notifier;
pub mod ticker;

// Re-export main functions
pub use notifier::notifier_task;
pub use ticker::ticker_task;
