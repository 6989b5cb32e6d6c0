//! Conversion engine - exact cross-zone time conversion
//!
//! Conversion goes through one absolute instant, never through naive
//! hour-arithmetic across offsets, so DST and half/quarter-hour offset
//! zones are handled uniformly.

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, Utc};

use meridian_core::{
    ConversionRequest, ConversionResult, ConversionRow, MeridianError, MeridianResult, ZoneCatalog,
};

use crate::{CivilResolution, ClockSource};

/// Converts a civil time in one zone into every catalog zone
pub struct ConversionEngine {
    catalog: ZoneCatalog,
    clock: ClockSource,
}

impl ConversionEngine {
    pub fn new(catalog: ZoneCatalog, clock: ClockSource) -> Self {
        ConversionEngine { catalog, clock }
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// Convert `request` into a full cross-zone table
    ///
    /// "Today" is the source zone's civil date at `reference`, and the
    /// requested wall-clock time is interpreted on that date in the
    /// source zone.
    ///
    /// DST boundary policy (matching the original widget's library
    /// semantics): a repeated civil time resolves to its earlier
    /// occurrence, and a civil time inside a spring-forward gap is
    /// pushed forward by the gap length onto the post-transition
    /// offset. Neither case is reported as an error.
    pub fn convert(
        &self,
        request: &ConversionRequest,
        reference: DateTime<Utc>,
    ) -> MeridianResult<ConversionResult> {
        let time = NaiveTime::from_hms_opt(request.hour, request.minute, 0).ok_or(
            MeridianError::InvalidTime {
                hour: request.hour,
                minute: request.minute,
            },
        )?;

        let today = self.clock.civil_date(&request.source_zone_id, reference)?;
        let civil = NaiveDateTime::new(today, time);

        let instant = match self
            .clock
            .provider()
            .resolve_civil(&request.source_zone_id, civil)?
        {
            CivilResolution::Unique { instant, .. } => instant,
            CivilResolution::Ambiguous { earlier, .. } => earlier.0,
            // Interpreting a gap time with the pre-transition offset
            // lands just past the transition, which is exactly the
            // "shift forward by the gap" behavior.
            CivilResolution::Gap { offset_before, .. } => {
                civil.and_utc() - Duration::seconds(offset_before as i64)
            }
        };

        let rows = self
            .catalog
            .entries()
            .iter()
            .map(|entry| {
                let moment = match self.clock.now(&entry.id(), instant) {
                    Ok(moment) => Some(moment),
                    Err(err) => {
                        tracing::warn!(zone = entry.zone_id, error = %err, "conversion row unavailable");
                        None
                    }
                };
                ConversionRow {
                    entry: *entry,
                    moment,
                    is_source: entry.zone_id == request.source_zone_id.as_str(),
                }
            })
            .collect();

        Ok(ConversionResult { instant, rows })
    }
}
