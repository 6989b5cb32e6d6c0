//! Slot and conversion models
//!
//! These are the values crossing the presentation boundary: clock slots
//! the display owns, and the transient request/result pair of the
//! conversion panel.

use std::fmt;

use crate::{CivilMoment, ZoneEntry, ZoneId};

/// Index of a clock slot in the display
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotId(pub usize);

impl SlotId {
    #[inline]
    pub fn new(index: usize) -> Self {
        SlotId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One visible clock widget's state
///
/// Owned by the presentation layer. The core only reads
/// `selected_zone_id` and replaces `last_computed` each tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockSlot {
    /// Zone this slot displays
    pub selected_zone_id: ZoneId,
    /// Most recent reading, None until the first tick lands
    pub last_computed: Option<CivilMoment>,
}

impl ClockSlot {
    pub fn new(selected_zone_id: ZoneId) -> Self {
        ClockSlot {
            selected_zone_id,
            last_computed: None,
        }
    }

    /// Point the slot at a different zone (user selection, immediate)
    pub fn select_zone(&mut self, zone_id: ZoneId) {
        self.selected_zone_id = zone_id;
    }
}

/// A single conversion request: "what is H:M in this zone, elsewhere?"
///
/// Transient, validated before use, discarded after producing a
/// [`ConversionResult`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_zone_id: ZoneId,
    pub hour: u32,
    pub minute: u32,
}

impl ConversionRequest {
    pub fn new(source_zone_id: ZoneId, hour: u32, minute: u32) -> Self {
        ConversionRequest {
            source_zone_id,
            hour,
            minute,
        }
    }
}

/// One row of the conversion table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRow {
    /// Catalog entry this row belongs to
    pub entry: ZoneEntry,
    /// Converted reading, None when the zone could not be resolved
    pub moment: Option<CivilMoment>,
    /// True for the row matching the request's source zone
    pub is_source: bool,
}

/// Full cross-zone table for one request, in catalog order
///
/// Always has exactly one row per catalog entry; recomputed fully on
/// each request, never incrementally updated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionResult {
    /// The absolute instant the requested civil time resolved to
    pub instant: chrono::DateTime<chrono::Utc>,
    /// Rows in catalog order
    pub rows: Vec<ConversionRow>,
}

impl ConversionResult {
    /// The row flagged as the request's source zone, if present
    pub fn source_row(&self) -> Option<&ConversionRow> {
        self.rows.iter().find(|r| r.is_source)
    }
}
