//! Month records: raw candidates and numbered months.

use std::fmt::{Display, Formatter};

use koyomi_time::{CivilDateTime, MILLIS_PER_DAY};

use crate::terms_types::SolarTerm;

/// A candidate month: the span between consecutive new-moon day boundaries,
/// with the solar terms falling inside it.
///
/// Candidates carry no number; intercalation decides numbers and leap status
/// per solstice-to-solstice window.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCandidate {
    /// First millisecond of the month: 00:00 of the new-moon day.
    pub start_millis: i64,
    /// Last millisecond of the month: 23:59:59.999 of its final day.
    pub end_millis: i64,
    /// Pre-climate terms inside the span, ascending.
    pub pre_climates: Vec<SolarTerm>,
    /// Mid-climate terms inside the span, ascending.
    pub mid_climates: Vec<SolarTerm>,
}

impl MonthCandidate {
    /// A month without a mid-climate may become the leap month.
    pub fn leap_eligible(&self) -> bool {
        self.mid_climates.is_empty()
    }

    /// Whether the month contains the winter solstice (the 270° mid-climate).
    /// Such a month opens a window and is always numbered 11.
    pub fn contains_winter_solstice(&self) -> bool {
        self.mid_climates.iter().any(|t| t.longitude == 270)
    }
}

/// A numbered month of the assembled year.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarMonth {
    /// Month number, 1 through 12. A leap month repeats its predecessor's.
    pub month_of_year: u32,
    /// Whether this is the intercalary (閏) month.
    pub intercalary: bool,
    /// First millisecond of the month.
    pub start_millis: i64,
    /// Last millisecond of the month.
    pub end_millis: i64,
    /// Pre-climate terms inside the span, ascending.
    pub pre_climates: Vec<SolarTerm>,
    /// Mid-climate terms inside the span, ascending.
    pub mid_climates: Vec<SolarTerm>,
    /// Offset the range is rendered at, in seconds.
    pub utc_offset_seconds: i32,
}

impl LunarMonth {
    /// Number of civil days in the month (29 or 30).
    pub fn day_count(&self) -> i64 {
        (self.end_millis + 1 - self.start_millis) / MILLIS_PER_DAY
    }

    /// Whether `epoch_millis` falls inside the month.
    pub fn contains(&self, epoch_millis: i64) -> bool {
        self.start_millis <= epoch_millis && epoch_millis <= self.end_millis
    }

    /// Whether the month still has no mid-climate.
    pub fn leap_eligible(&self) -> bool {
        self.mid_climates.is_empty()
    }
}

fn write_buckets(f: &mut Formatter<'_>, terms: &[SolarTerm]) -> std::fmt::Result {
    write!(f, "[")?;
    for (index, term) in terms.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", term.longitude)?;
    }
    write!(f, "]")
}

impl Display for LunarMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}, range: {} - {} ({}), intercalaryable: {}, preClimates: ",
            if self.intercalary { "閏" } else { "" },
            self.month_of_year,
            CivilDateTime::from_epoch_millis(self.start_millis, self.utc_offset_seconds),
            CivilDateTime::from_epoch_millis(self.end_millis, self.utc_offset_seconds),
            self.day_count(),
            self.leap_eligible(),
        )?;
        write_buckets(f, &self.pre_climates)?;
        write!(f, ", midClimates: ")?;
        write_buckets(f, &self.mid_climates)
    }
}
