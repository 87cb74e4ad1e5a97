//! The assembled calendar year.

use std::fmt::{Display, Formatter};

use koyomi_time::{CivilDateTime, MILLIS_PER_DAY};

use crate::month_types::LunarMonth;

/// A lunisolar calendar year: the run of months from month 1 through
/// month 12, with the intercalary month spliced in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarYear {
    /// Year label: the offset-civil year containing the start of the
    /// month-11 (winter solstice) month.
    pub year: i32,
    /// First millisecond of the year (start of month 1).
    pub first_millis: i64,
    /// Last millisecond of the year (end of month 12).
    pub last_millis: i64,
    /// Offset the ranges are rendered at, in seconds.
    pub utc_offset_seconds: i32,
    /// Months in time order: twelve, or thirteen in a leap year.
    pub months: Vec<LunarMonth>,
}

impl CalendarYear {
    /// Whether `epoch_millis` falls inside the year.
    pub fn contains(&self, epoch_millis: i64) -> bool {
        self.first_millis <= epoch_millis && epoch_millis <= self.last_millis
    }

    /// The month containing `epoch_millis`, if the instant is in the year.
    pub fn month_containing(&self, epoch_millis: i64) -> Option<&LunarMonth> {
        self.months.iter().find(|m| m.contains(epoch_millis))
    }

    /// The intercalary month, in a leap year.
    pub fn leap_month(&self) -> Option<&LunarMonth> {
        self.months.iter().find(|m| m.intercalary)
    }
}

impl Display for CalendarYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ( {} days ) ",
            CivilDateTime::from_epoch_millis(self.first_millis, self.utc_offset_seconds),
            CivilDateTime::from_epoch_millis(self.last_millis, self.utc_offset_seconds),
            (self.last_millis - self.first_millis) / MILLIS_PER_DAY,
        )?;
        for month in &self.months {
            write!(f, "\n\t{month}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JST: i32 = 9 * 3_600;

    fn day_start(year: i32, month: u32, day: u32) -> i64 {
        CivilDateTime::new(year, month, day, 0, 0, 0, 0, JST).to_epoch_millis()
    }

    fn month(number: u32, intercalary: bool, start: i64, end: i64) -> LunarMonth {
        LunarMonth {
            month_of_year: number,
            intercalary,
            start_millis: start,
            end_millis: end,
            pre_climates: vec![],
            mid_climates: vec![],
            utc_offset_seconds: JST,
        }
    }

    fn sample_year() -> CalendarYear {
        let first = day_start(2033, 1, 31);
        let last = day_start(2034, 2, 18) + MILLIS_PER_DAY - 1;
        CalendarYear {
            year: 2033,
            first_millis: first,
            last_millis: last,
            utc_offset_seconds: JST,
            months: vec![
                month(1, false, first, day_start(2033, 2, 28) + MILLIS_PER_DAY - 1),
                month(
                    11,
                    true,
                    day_start(2033, 12, 22),
                    day_start(2034, 1, 19) + MILLIS_PER_DAY - 1,
                ),
                month(12, false, day_start(2034, 1, 20), last),
            ],
        }
    }

    #[test]
    fn containment_and_lookup() {
        let year = sample_year();
        assert!(year.contains(year.first_millis));
        assert!(year.contains(year.last_millis));
        assert!(!year.contains(year.first_millis - 1));
        assert!(!year.contains(year.last_millis + 1));
        let found = year.month_containing(day_start(2034, 1, 1)).unwrap();
        assert_eq!(found.month_of_year, 11);
        assert!(found.intercalary);
        assert!(year.month_containing(day_start(2035, 1, 1)).is_none());
        assert_eq!(year.leap_month().unwrap().month_of_year, 11);
    }

    #[test]
    fn summary_header_counts_whole_days() {
        let year = sample_year();
        let rendered = year.to_string();
        let header = rendered.lines().next().unwrap();
        assert_eq!(
            header,
            "2033-01-31T00:00+09:00 - 2034-02-18T23:59:59.999+09:00 ( 383 days ) "
        );
        // One tab-indented line per month.
        assert_eq!(rendered.lines().count(), 1 + year.months.len());
        for line in rendered.lines().skip(1) {
            assert!(line.starts_with('\t'), "{line}");
        }
        assert!(rendered.contains("\n\t閏11, range: 2033-12-22T00:00+09:00"));
    }
}
