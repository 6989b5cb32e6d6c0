//! Slot registry - clock slots shared between display and scheduler
//!
//! The display mutates zone selections; the scheduler writes readings.
//! Those are the only two actors, and each touches a different field,
//! so a plain RwLock around the slot vector is all the coordination
//! needed.

use std::sync::Arc;

use parking_lot::RwLock;

use meridian_core::{
    CivilMoment, ClockSlot, MeridianError, MeridianResult, SlotId, ZoneCatalog, ZoneId,
};

/// Shared, ordered collection of clock slots
#[derive(Clone)]
pub struct SlotRegistry {
    inner: Arc<RwLock<Vec<ClockSlot>>>,
}

impl SlotRegistry {
    pub fn new(slots: Vec<ClockSlot>) -> Self {
        SlotRegistry {
            inner: Arc::new(RwLock::new(slots)),
        }
    }

    /// `count` slots preselecting catalog entries round-robin, the
    /// original widget's default (slot i starts on entry i mod len).
    /// An empty catalog yields an empty registry.
    pub fn with_defaults(catalog: &ZoneCatalog, count: usize) -> Self {
        if catalog.is_empty() {
            return Self::new(Vec::new());
        }
        let slots = (0..count)
            .map(|i| ClockSlot::new(catalog.entries()[i % catalog.len()].id()))
            .collect();
        Self::new(slots)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Re-point a slot at a different zone (takes effect next tick)
    pub fn select_zone(&self, slot: SlotId, zone: ZoneId) -> MeridianResult<()> {
        let mut slots = self.inner.write();
        let entry = slots
            .get_mut(slot.index())
            .ok_or(MeridianError::UnknownSlot(slot.index()))?;
        entry.select_zone(zone);
        Ok(())
    }

    /// Zone currently selected for `slot`
    pub fn selected_zone(&self, slot: SlotId) -> Option<ZoneId> {
        self.inner
            .read()
            .get(slot.index())
            .map(|s| s.selected_zone_id.clone())
    }

    /// Copy of all slots, for rendering
    pub fn snapshot(&self) -> Vec<ClockSlot> {
        self.inner.read().clone()
    }

    /// Selections at this moment, for one tick's queries. Taken as a
    /// copy so the lock is not held across the tick's channel sends.
    pub(crate) fn selections(&self) -> Vec<(SlotId, ZoneId)> {
        self.inner
            .read()
            .iter()
            .enumerate()
            .map(|(i, slot)| (SlotId::new(i), slot.selected_zone_id.clone()))
            .collect()
    }

    /// Record a tick's reading. Dropped silently if the slot's zone
    /// changed since the tick's selections were taken; the next tick
    /// will cover the new zone.
    pub(crate) fn record(&self, slot: SlotId, moment: CivilMoment) {
        let mut slots = self.inner.write();
        if let Some(entry) = slots.get_mut(slot.index()) {
            if entry.selected_zone_id == moment.zone_id {
                entry.last_computed = Some(moment);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn moment(zone: &str) -> CivilMoment {
        CivilMoment::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            0,
            ZoneId::new(zone),
        )
    }

    #[test]
    fn test_default_preselection_wraps() {
        let catalog = ZoneCatalog::new();
        let registry = SlotRegistry::with_defaults(&catalog, 26);

        assert_eq!(registry.len(), 26);
        assert_eq!(
            registry.selected_zone(SlotId::new(0)).unwrap().as_str(),
            "America/New_York"
        );
        // 26 slots over a 24-entry catalog wraps back to the start
        assert_eq!(
            registry.selected_zone(SlotId::new(24)).unwrap().as_str(),
            "America/New_York"
        );
    }

    #[test]
    fn test_select_zone_out_of_range() {
        let registry = SlotRegistry::with_defaults(&ZoneCatalog::new(), 4);
        let err = registry
            .select_zone(SlotId::new(9), ZoneId::new("Asia/Tokyo"))
            .unwrap_err();
        assert_eq!(err, MeridianError::UnknownSlot(9));
    }

    #[test]
    fn test_record_updates_last_computed() {
        let registry = SlotRegistry::new(vec![ClockSlot::new(ZoneId::new("Europe/London"))]);
        registry.record(SlotId::new(0), moment("Europe/London"));

        let snapshot = registry.snapshot();
        assert_eq!(
            snapshot[0].last_computed.as_ref().unwrap().format_time(),
            "12:00:00"
        );
    }

    #[test]
    fn test_record_for_stale_zone_is_dropped() {
        let registry = SlotRegistry::new(vec![ClockSlot::new(ZoneId::new("Europe/London"))]);
        registry
            .select_zone(SlotId::new(0), ZoneId::new("Asia/Tokyo"))
            .unwrap();

        // Reading computed for the old selection must not land
        registry.record(SlotId::new(0), moment("Europe/London"));
        assert!(registry.snapshot()[0].last_computed.is_none());
    }
}
