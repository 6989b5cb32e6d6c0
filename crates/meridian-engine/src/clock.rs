//! Clock source - civil time for a zone at a shared reference instant

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use meridian_core::{CivilMoment, MeridianResult, ZoneId};

use crate::{TzdbProvider, ZoneRuleProvider};

/// Produces a zone's civil date/time for a caller-supplied instant
///
/// The reference instant is passed in rather than read internally so
/// that every simultaneous query in one refresh tick reflects the same
/// moment - sequential wall-clock reads would let clocks drift relative
/// to each other.
#[derive(Clone)]
pub struct ClockSource {
    provider: Arc<dyn ZoneRuleProvider>,
}

impl ClockSource {
    pub fn new(provider: Arc<dyn ZoneRuleProvider>) -> Self {
        ClockSource { provider }
    }

    /// Clock source over the bundled IANA database
    pub fn tzdb() -> Self {
        Self::new(Arc::new(TzdbProvider::new()))
    }

    /// Civil date/time and offset for `zone` at `reference`
    ///
    /// Fails with `UnknownZone` when the provider cannot resolve the
    /// identifier; fatal for that slot's update only, never for others.
    pub fn now(&self, zone: &ZoneId, reference: DateTime<Utc>) -> MeridianResult<CivilMoment> {
        let offset = self.provider.offset_at(zone, reference)?;
        let civil = reference.naive_utc() + Duration::seconds(offset as i64);
        Ok(CivilMoment::new(
            civil.date(),
            civil.time(),
            offset,
            zone.clone(),
        ))
    }

    /// "Today" as read in `zone` at `reference` (time-of-day discarded)
    pub fn civil_date(&self, zone: &ZoneId, reference: DateTime<Utc>) -> MeridianResult<NaiveDate> {
        self.now(zone, reference).map(|moment| moment.date)
    }

    pub fn provider(&self) -> &Arc<dyn ZoneRuleProvider> {
        &self.provider
    }
}
