//! Civil time values
//!
//! A [`CivilMoment`] is the calendar date and wall-clock time a human in
//! some zone would read off a clock, together with the UTC offset in
//! effect at that moment. It is a pure value: recomputed fresh on every
//! query and replaced wholesale, never mutated in place.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::ZoneId;

/// Civil date/time in a specific zone at a specific absolute instant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CivilMoment {
    /// Calendar date as read in the zone
    pub date: NaiveDate,
    /// Wall-clock time as read in the zone
    pub time: NaiveTime,
    /// UTC offset in effect at this date/time, in seconds
    pub utc_offset_seconds: i32,
    /// Zone the reading belongs to
    pub zone_id: ZoneId,
}

impl CivilMoment {
    pub fn new(date: NaiveDate, time: NaiveTime, utc_offset_seconds: i32, zone_id: ZoneId) -> Self {
        CivilMoment {
            date,
            time,
            utc_offset_seconds,
            zone_id,
        }
    }

    /// Date and time as one naive value (no offset attached)
    #[inline]
    pub fn civil_datetime(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time)
    }

    /// Wall-clock reading, "HH:MM:SS"
    pub fn format_time(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    /// Calendar reading, "Www, Mmm D, YYYY" (day not zero-padded)
    pub fn format_date(&self) -> String {
        self.date.format("%a, %b %-d, %Y").to_string()
    }

    /// Offset label, "UTC+H:MM" / "UTC-H:MM"
    ///
    /// Sign is always shown, hours are not padded, minutes are. Covers
    /// half-hour and quarter-hour zones ("UTC+5:30", "UTC+5:45").
    pub fn offset_label(&self) -> String {
        let hours = self.utc_offset_seconds / 3600;
        let minutes = ((self.utc_offset_seconds % 3600) / 60).abs();
        format!("UTC{:+}:{:02}", hours, minutes)
    }
}
