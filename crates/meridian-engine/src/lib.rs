//! Meridian Engine - Zone rule resolution and time conversion
//!
//! This crate implements the computational core:
//! - [`ZoneRuleProvider`]: injected, read-only access to zone rule data
//! - [`ClockSource`]: current civil time for a zone at a shared instant
//! - [`ConversionEngine`]: exact cross-zone conversion through one
//!   absolute instant
//!
//! Nothing here blocks or performs I/O; both operations are pure
//! computations over supplied inputs.

pub mod clock;
pub mod convert;
pub mod provider;

pub use clock::*;
pub use convert::*;
pub use provider::*;

#[cfg(test)]
pub(crate) mod testing;
