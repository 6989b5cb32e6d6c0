//! Error types for Meridian

use thiserror::Error;

/// Core Meridian errors
///
/// All failures are returned as values to the caller; nothing in the
/// core terminates the process. `UnknownZone` is a per-slot / per-row
/// degraded state, never fatal to the system as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeridianError {
    // Zone errors
    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    #[error("zone not in catalog: {0}")]
    ZoneNotInCatalog(String),

    // Input errors
    #[error("invalid time {hour:02}:{minute:02}: hours must be 0-23, minutes 0-59")]
    InvalidTime { hour: u32, minute: u32 },

    // Slot errors
    #[error("no clock slot with index {0}")]
    UnknownSlot(usize),

    // Scheduler errors
    #[error("scheduler is not idle")]
    SchedulerNotIdle,
}

/// Result type for Meridian operations
pub type MeridianResult<T> = Result<T, MeridianError>;
