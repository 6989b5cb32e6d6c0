//! Zone rule provider - injected, read-only access to zone rule data
//!
//! The rule database is a dependency handed to the engine, not ambient
//! global state, so the core stays testable against a fixed synthetic
//! rule table independent of the host's real-world tzdb.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use meridian_core::{MeridianError, MeridianResult, ZoneId};

/// How a civil date/time in a zone maps onto absolute instants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CivilResolution {
    /// Exactly one instant carries this civil time
    Unique {
        instant: DateTime<Utc>,
        offset_seconds: i32,
    },
    /// Clocks fell back over this civil time; it occurs twice
    Ambiguous {
        earlier: (DateTime<Utc>, i32),
        later: (DateTime<Utc>, i32),
    },
    /// Clocks skipped over this civil time; it never occurs
    Gap {
        /// Offset in effect just before the transition
        offset_before: i32,
        /// Offset in effect just after the transition
        offset_after: i32,
    },
}

/// Read-only zone rule access
///
/// Both operations are total over resolvable zone identifiers and fail
/// with [`MeridianError::UnknownZone`] otherwise.
pub trait ZoneRuleProvider: Send + Sync {
    /// UTC offset in effect for `zone` at absolute `instant`, in seconds
    fn offset_at(&self, zone: &ZoneId, instant: DateTime<Utc>) -> MeridianResult<i32>;

    /// Map a civil date/time in `zone` to the absolute instant(s) it denotes
    fn resolve_civil(&self, zone: &ZoneId, civil: NaiveDateTime)
        -> MeridianResult<CivilResolution>;
}

/// Provider backed by the IANA database bundled with chrono-tz
#[derive(Clone, Copy, Debug, Default)]
pub struct TzdbProvider;

impl TzdbProvider {
    pub fn new() -> Self {
        TzdbProvider
    }

    fn tz(&self, zone: &ZoneId) -> MeridianResult<Tz> {
        zone.as_str()
            .parse::<Tz>()
            .map_err(|_| MeridianError::UnknownZone(zone.as_str().to_string()))
    }
}

impl ZoneRuleProvider for TzdbProvider {
    fn offset_at(&self, zone: &ZoneId, instant: DateTime<Utc>) -> MeridianResult<i32> {
        let tz = self.tz(zone)?;
        Ok(tz
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc())
    }

    fn resolve_civil(
        &self,
        zone: &ZoneId,
        civil: NaiveDateTime,
    ) -> MeridianResult<CivilResolution> {
        let tz = self.tz(zone)?;
        match tz.from_local_datetime(&civil) {
            LocalResult::Single(dt) => Ok(CivilResolution::Unique {
                instant: dt.with_timezone(&Utc),
                offset_seconds: dt.offset().fix().local_minus_utc(),
            }),
            LocalResult::Ambiguous(first, second) => Ok(CivilResolution::Ambiguous {
                earlier: (
                    first.with_timezone(&Utc),
                    first.offset().fix().local_minus_utc(),
                ),
                later: (
                    second.with_timezone(&Utc),
                    second.offset().fix().local_minus_utc(),
                ),
            }),
            LocalResult::None => {
                // The civil time sits in a spring-forward gap. The
                // surrounding offsets are recovered by sampling one day
                // on either side of the transition; real tzdb
                // transitions are never closer together than that.
                let probe = civil.and_utc();
                let offset_before = tz
                    .offset_from_utc_datetime(&(probe - Duration::days(1)).naive_utc())
                    .fix()
                    .local_minus_utc();
                let offset_after = tz
                    .offset_from_utc_datetime(&(probe + Duration::days(1)).naive_utc())
                    .fix()
                    .local_minus_utc();
                Ok(CivilResolution::Gap {
                    offset_before,
                    offset_after,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn civil(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_offset_at_matches_tzdb() {
        let provider = TzdbProvider::new();
        let winter = civil(2024, 1, 15, 12, 0).and_utc();
        let summer = civil(2024, 7, 15, 12, 0).and_utc();

        let ny = ZoneId::new("America/New_York");
        assert_eq!(provider.offset_at(&ny, winter).unwrap(), -5 * 3600);
        assert_eq!(provider.offset_at(&ny, summer).unwrap(), -4 * 3600);

        let kolkata = ZoneId::new("Asia/Kolkata");
        assert_eq!(provider.offset_at(&kolkata, winter).unwrap(), 19800);
        assert_eq!(provider.offset_at(&kolkata, summer).unwrap(), 19800);
    }

    #[test]
    fn test_unknown_zone() {
        let provider = TzdbProvider::new();
        let err = provider
            .offset_at(&ZoneId::new("Mars/Olympus"), Utc::now())
            .unwrap_err();
        assert_eq!(err, MeridianError::UnknownZone("Mars/Olympus".to_string()));
    }

    #[test]
    fn test_resolve_unique() {
        let provider = TzdbProvider::new();
        let resolution = provider
            .resolve_civil(&ZoneId::new("Europe/London"), civil(2024, 1, 15, 23, 30))
            .unwrap();
        assert_eq!(
            resolution,
            CivilResolution::Unique {
                instant: civil(2024, 1, 15, 23, 30).and_utc(),
                offset_seconds: 0,
            }
        );
    }

    #[test]
    fn test_resolve_spring_forward_gap() {
        // US Eastern, 2024-03-10: 02:00 EST jumps to 03:00 EDT
        let provider = TzdbProvider::new();
        let resolution = provider
            .resolve_civil(&ZoneId::new("America/New_York"), civil(2024, 3, 10, 2, 30))
            .unwrap();
        assert_eq!(
            resolution,
            CivilResolution::Gap {
                offset_before: -5 * 3600,
                offset_after: -4 * 3600,
            }
        );
    }

    #[test]
    fn test_resolve_fall_back_ambiguity() {
        // US Eastern, 2024-11-03: 02:00 EDT falls back to 01:00 EST,
        // so 01:30 occurs twice
        let provider = TzdbProvider::new();
        let resolution = provider
            .resolve_civil(&ZoneId::new("America/New_York"), civil(2024, 11, 3, 1, 30))
            .unwrap();
        match resolution {
            CivilResolution::Ambiguous { earlier, later } => {
                assert_eq!(earlier.1, -4 * 3600);
                assert_eq!(later.1, -5 * 3600);
                assert!(earlier.0 < later.0);
                assert_eq!(later.0 - earlier.0, Duration::hours(1));
            }
            other => panic!("expected ambiguous resolution, got {:?}", other),
        }
    }
}
