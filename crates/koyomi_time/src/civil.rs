//! Civil date/time at a fixed UTC offset, with millisecond precision.
//!
//! Provides `CivilDateTime`, the offset-local calendar view the engine uses
//! for day boundaries, month re-anchoring, and display. The Display form
//! matches ISO-8601 with minute precision when seconds and milliseconds are
//! zero and millisecond precision otherwise (`2033-01-31T00:00+09:00`,
//! `2034-02-18T23:59:59.999+09:00`).

use crate::julian::{MILLIS_PER_DAY, civil_from_days, days_from_civil, days_in_month};

/// Civil calendar date/time at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    /// Fixed offset from UTC, in seconds (east positive).
    pub offset_seconds: i32,
}

impl CivilDateTime {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        offset_seconds: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            offset_seconds,
        }
    }

    /// The offset-local calendar view of an epoch-millisecond instant.
    pub fn from_epoch_millis(epoch_millis: i64, offset_seconds: i32) -> Self {
        let local = epoch_millis + offset_seconds as i64 * 1_000;
        let days = local.div_euclid(MILLIS_PER_DAY);
        let in_day = local.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (in_day / 3_600_000) as u32,
            minute: (in_day / 60_000 % 60) as u32,
            second: (in_day / 1_000 % 60) as u32,
            millisecond: (in_day % 1_000) as u32,
            offset_seconds,
        }
    }

    /// Milliseconds from the Unix epoch for this instant.
    pub fn to_epoch_millis(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day) * MILLIS_PER_DAY
            + self.hour as i64 * 3_600_000
            + self.minute as i64 * 60_000
            + self.second as i64 * 1_000
            + self.millisecond as i64
            - self.offset_seconds as i64 * 1_000
    }

    /// A copy with the month replaced, clamping the day-of-month to the last
    /// valid day of the new month.
    pub fn with_month(&self, month: u32) -> Self {
        Self {
            month,
            day: self.day.min(days_in_month(self.year, month)),
            ..*self
        }
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )?;
        if self.second != 0 || self.millisecond != 0 {
            write!(f, ":{:02}", self.second)?;
        }
        if self.millisecond != 0 {
            write!(f, ".{:03}", self.millisecond)?;
        }
        if self.offset_seconds == 0 {
            return write!(f, "Z");
        }
        let sign = if self.offset_seconds < 0 { '-' } else { '+' };
        let abs = self.offset_seconds.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 3_600, abs / 60 % 60)?;
        if abs % 60 != 0 {
            write!(f, ":{:02}", abs % 60)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JST: i32 = 9 * 3_600;

    #[test]
    fn epoch_millis_round_trip() {
        let t = CivilDateTime::new(2033, 1, 31, 0, 0, 0, 0, JST);
        assert_eq!(t.to_epoch_millis(), 1_990_710_000_000);
        assert_eq!(CivilDateTime::from_epoch_millis(1_990_710_000_000, JST), t);

        let t = CivilDateTime::new(2034, 2, 18, 23, 59, 59, 999, JST);
        assert_eq!(t.to_epoch_millis(), 2_023_887_599_999);
        assert_eq!(CivilDateTime::from_epoch_millis(2_023_887_599_999, JST), t);

        let t = CivilDateTime::new(2017, 1, 28, 0, 0, 0, 0, JST);
        assert_eq!(t.to_epoch_millis(), 1_485_529_200_000);
    }

    #[test]
    fn epoch_is_morning_in_tokyo() {
        let t = CivilDateTime::from_epoch_millis(0, JST);
        assert_eq!((t.year, t.month, t.day, t.hour), (1970, 1, 1, 9));
    }

    #[test]
    fn display_minute_precision_when_midnight() {
        let t = CivilDateTime::new(2033, 1, 31, 0, 0, 0, 0, JST);
        assert_eq!(t.to_string(), "2033-01-31T00:00+09:00");
    }

    #[test]
    fn display_millis_when_present() {
        let t = CivilDateTime::new(2034, 2, 18, 23, 59, 59, 999, JST);
        assert_eq!(t.to_string(), "2034-02-18T23:59:59.999+09:00");
    }

    #[test]
    fn display_seconds_without_millis() {
        let t = CivilDateTime::new(2024, 6, 1, 12, 30, 45, 0, 0);
        assert_eq!(t.to_string(), "2024-06-01T12:30:45Z");
    }

    #[test]
    fn display_negative_offset() {
        let t = CivilDateTime::new(2024, 6, 1, 12, 0, 0, 0, -5 * 3_600);
        assert_eq!(t.to_string(), "2024-06-01T12:00-05:00");
    }

    #[test]
    fn with_month_clamps_day() {
        let t = CivilDateTime::new(2017, 1, 31, 21, 0, 0, 0, JST);
        let dec = t.with_month(12);
        assert_eq!((dec.month, dec.day, dec.hour), (12, 31, 21));
        let feb = t.with_month(2);
        assert_eq!((feb.month, feb.day), (2, 28));
        let leap = CivilDateTime::new(2020, 1, 31, 0, 0, 0, 0, JST).with_month(2);
        assert_eq!((leap.month, leap.day), (2, 29));
    }
}
