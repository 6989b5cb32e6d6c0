//! Meridian Runtime - Periodic refresh loop
//!
//! This crate owns the recurring tick that keeps clock slots current:
//! - [`SlotRegistry`]: the clock slots shared with the presentation layer
//! - [`RefreshScheduler`]: the interval-driven loop that re-queries the
//!   clock source once per tick and publishes updates on a channel

pub mod scheduler;
pub mod slots;

pub use scheduler::*;
pub use slots::*;
