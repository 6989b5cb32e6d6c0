//! Zone identity types
//!
//! Zone identifiers are IANA-style names ("Europe/London"). The core
//! carries them as opaque strings; whether a name resolves to actual
//! rule data is decided by the rule provider at query time.

use std::fmt;

/// IANA-style time zone identifier
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        ZoneId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        ZoneId::new(id)
    }
}

impl From<String> for ZoneId {
    fn from(id: String) -> Self {
        ZoneId(id)
    }
}

/// One catalog entry: a human-readable display name (with an
/// abbreviation hint) and the zone identifier it stands for.
/// Entries are created at startup from a static list and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneEntry {
    /// Unique display name, e.g. "London (GMT/BST)"
    pub display_name: &'static str,
    /// IANA identifier, e.g. "Europe/London"
    pub zone_id: &'static str,
}

impl ZoneEntry {
    pub const fn new(display_name: &'static str, zone_id: &'static str) -> Self {
        ZoneEntry {
            display_name,
            zone_id,
        }
    }

    /// Owned identifier for handing to slots and providers
    pub fn id(&self) -> ZoneId {
        ZoneId::new(self.zone_id)
    }
}
