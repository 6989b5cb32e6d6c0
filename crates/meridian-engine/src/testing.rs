//! Synthetic rule provider for deterministic tests
//!
//! A fixed table of `(transition instant, offset)` pairs per zone, so
//! engine behavior can be pinned down independent of the host tzdb.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use meridian_core::{MeridianError, MeridianResult, ZoneId};

use crate::{CivilResolution, ZoneRuleProvider};

/// Rule table: each entry is the offset taking effect at an instant,
/// valid until the next entry. The first entry covers all earlier time.
pub(crate) struct FixedRuleProvider {
    zones: HashMap<String, Vec<(DateTime<Utc>, i32)>>,
}

impl FixedRuleProvider {
    pub fn new() -> Self {
        FixedRuleProvider {
            zones: HashMap::new(),
        }
    }

    pub fn with_fixed_offset(mut self, zone: &str, offset_seconds: i32) -> Self {
        self.zones
            .insert(zone.to_string(), vec![(DateTime::<Utc>::MIN_UTC, offset_seconds)]);
        self
    }

    pub fn with_transitions(mut self, zone: &str, transitions: Vec<(DateTime<Utc>, i32)>) -> Self {
        debug_assert!(transitions.windows(2).all(|w| w[0].0 < w[1].0));
        self.zones.insert(zone.to_string(), transitions);
        self
    }

    fn segments(&self, zone: &ZoneId) -> MeridianResult<&[(DateTime<Utc>, i32)]> {
        self.zones
            .get(zone.as_str())
            .map(|v| v.as_slice())
            .ok_or_else(|| MeridianError::UnknownZone(zone.as_str().to_string()))
    }
}

impl ZoneRuleProvider for FixedRuleProvider {
    fn offset_at(&self, zone: &ZoneId, instant: DateTime<Utc>) -> MeridianResult<i32> {
        let segments = self.segments(zone)?;
        let offset = segments
            .iter()
            .rev()
            .find(|(start, _)| *start <= instant)
            .map(|(_, offset)| *offset)
            .unwrap_or(segments[0].1);
        Ok(offset)
    }

    fn resolve_civil(
        &self,
        zone: &ZoneId,
        civil: NaiveDateTime,
    ) -> MeridianResult<CivilResolution> {
        let segments = self.segments(zone)?;
        let civil_utc = civil.and_utc();

        let mut matches: Vec<(DateTime<Utc>, i32)> = Vec::new();
        for (i, &(start, offset)) in segments.iter().enumerate() {
            let end = segments
                .get(i + 1)
                .map(|&(next, _)| next)
                .unwrap_or(DateTime::<Utc>::MAX_UTC);
            let candidate = civil_utc - Duration::seconds(offset as i64);
            if candidate >= start && candidate < end {
                matches.push((candidate, offset));
            }
        }

        match matches.len() {
            1 => Ok(CivilResolution::Unique {
                instant: matches[0].0,
                offset_seconds: matches[0].1,
            }),
            2 => {
                matches.sort_by_key(|(instant, _)| *instant);
                Ok(CivilResolution::Ambiguous {
                    earlier: matches[0],
                    later: matches[1],
                })
            }
            _ => {
                // No instant carries this civil time: it fell in a gap.
                // Find the forward transition whose skipped civil range
                // contains it.
                for window in segments.windows(2) {
                    let (_, before) = window[0];
                    let (transition, after) = window[1];
                    if after > before {
                        let gap_start = transition + Duration::seconds(before as i64);
                        let gap_end = transition + Duration::seconds(after as i64);
                        if civil_utc >= gap_start && civil_utc < gap_end {
                            return Ok(CivilResolution::Gap {
                                offset_before: before,
                                offset_after: after,
                            });
                        }
                    }
                }
                Err(MeridianError::UnknownZone(zone.as_str().to_string()))
            }
        }
    }
}
