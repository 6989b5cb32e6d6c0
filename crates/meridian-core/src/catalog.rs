//! Zone catalog - the fixed, ordered registry behind every zone picker
//!
//! A flat static list rather than a lazily-loaded registry: the
//! catalog's enumerated entries are the only non-trivial data Meridian
//! ships, and keeping it in code detaches correctness from any
//! zone-database I/O. Insertion order is preserved and drives both
//! picker ordering and conversion-table row ordering.

use crate::{MeridianError, MeridianResult, ZoneEntry};

/// Default catalog contents
const DEFAULT_ZONES: &[ZoneEntry] = &[
    ZoneEntry::new("New York (EST/EDT)", "America/New_York"),
    ZoneEntry::new("London (GMT/BST)", "Europe/London"),
    ZoneEntry::new("Tokyo (JST)", "Asia/Tokyo"),
    ZoneEntry::new("Sydney (AEST/AEDT)", "Australia/Sydney"),
    ZoneEntry::new("Los Angeles (PST/PDT)", "America/Los_Angeles"),
    ZoneEntry::new("Paris (CET/CEST)", "Europe/Paris"),
    ZoneEntry::new("Dubai (GST)", "Asia/Dubai"),
    ZoneEntry::new("Singapore (SGT)", "Asia/Singapore"),
    ZoneEntry::new("Mumbai (IST)", "Asia/Kolkata"),
    ZoneEntry::new("Berlin (CET/CEST)", "Europe/Berlin"),
    ZoneEntry::new("Beijing (CST)", "Asia/Shanghai"),
    ZoneEntry::new("São Paulo (BRT/BRST)", "America/Sao_Paulo"),
    ZoneEntry::new("Prague (CET/CEST)", "Europe/Prague"),
    ZoneEntry::new("Vienna (CET/CEST)", "Europe/Vienna"),
    ZoneEntry::new("Warsaw (CET/CEST)", "Europe/Warsaw"),
    ZoneEntry::new("Budapest (CET/CEST)", "Europe/Budapest"),
    ZoneEntry::new("Rome (CET/CEST)", "Europe/Rome"),
    ZoneEntry::new("Amsterdam (CET/CEST)", "Europe/Amsterdam"),
    ZoneEntry::new("Madrid (CET/CEST)", "Europe/Madrid"),
    ZoneEntry::new("Stockholm (CET/CEST)", "Europe/Stockholm"),
    ZoneEntry::new("Athens (EET/EEST)", "Europe/Athens"),
    ZoneEntry::new("Helsinki (EET/EEST)", "Europe/Helsinki"),
    ZoneEntry::new("Lisbon (WET/WEST)", "Europe/Lisbon"),
    ZoneEntry::new("Dublin (GMT/IST)", "Europe/Dublin"),
];

/// Ordered, immutable registry of selectable zones
#[derive(Clone, Debug)]
pub struct ZoneCatalog {
    entries: Vec<ZoneEntry>,
}

impl ZoneCatalog {
    /// Catalog with the default zone list
    pub fn new() -> Self {
        Self::with_entries(DEFAULT_ZONES.to_vec())
    }

    /// Catalog over a caller-supplied list
    ///
    /// INVARIANT: display names must be unique within the list.
    pub fn with_entries(entries: Vec<ZoneEntry>) -> Self {
        debug_assert!(
            entries
                .iter()
                .all(|e| entries.iter().filter(|o| o.display_name == e.display_name).count() == 1),
            "catalog display names must be unique"
        );
        ZoneCatalog { entries }
    }

    /// Entries in insertion order
    #[inline]
    pub fn entries(&self) -> &[ZoneEntry] {
        &self.entries
    }

    /// Find an entry by its display name
    ///
    /// Total even though the UI constrains choices to catalog values:
    /// both the conversion panel and the clock slots look up by name.
    pub fn lookup(&self, display_name: &str) -> MeridianResult<&ZoneEntry> {
        self.entries
            .iter()
            .find(|e| e.display_name == display_name)
            .ok_or_else(|| MeridianError::ZoneNotInCatalog(display_name.to_string()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::new()
    }
}
