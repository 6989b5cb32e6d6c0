//! Meridian Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout Meridian:
//! - Zone identifiers and catalog entries (ZoneId, ZoneEntry, ZoneCatalog)
//! - Civil time values (CivilMoment)
//! - Clock slot and conversion models
//! - Error taxonomy

pub mod catalog;
pub mod civil;
pub mod error;
pub mod models;
pub mod zone;

pub use catalog::*;
pub use civil::*;
pub use error::*;
pub use models::*;
pub use zone::*;
