//! Date resolution: an instant to its lunisolar year, month, and day.

use std::fmt::{Display, Formatter};

use koyomi_ephem::Ephemeris;
use koyomi_time::{MILLIS_PER_DAY, jd_from_epoch_millis, start_of_day_millis};

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::solver::plus_months;
use crate::year::assemble_year;

/// A resolved lunisolar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunisolarDate {
    /// Lunisolar year label.
    pub year: i32,
    /// Month number, 1 through 12.
    pub month_of_year: u32,
    /// Whether the month is the intercalary (閏) month.
    pub intercalary: bool,
    /// Day of month, starting at 1.
    pub day_of_month: u32,
}

impl Display for LunisolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{}月{}日",
            self.year,
            if self.intercalary { "閏" } else { "" },
            self.month_of_year,
            self.day_of_month
        )
    }
}

/// Resolve the lunisolar date containing `julian_date`.
///
/// The year is assembled at the instant itself. Instants between New Year's
/// Day and the lunisolar new year fall before the assembled range, so a miss
/// re-assembles exactly once about two synodic months earlier; an instant
/// still outside is an error.
pub fn resolve_date<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    julian_date: f64,
) -> Result<LunisolarDate, CalendarError> {
    config.validate().map_err(CalendarError::InvalidConfig)?;
    let day_start = start_of_day_millis(julian_date, config.utc_offset_seconds);
    let mut year = assemble_year(eph, config, julian_date)?;
    if !year.contains(day_start) {
        tracing::warn!(julian_date, "instant outside assembled year, re-anchoring");
        year = assemble_year(eph, config, plus_months(config, julian_date, -2.1))?;
    }
    let month = year
        .month_containing(day_start)
        .ok_or(CalendarError::UnanchoredYear)?;
    Ok(LunisolarDate {
        year: year.year,
        month_of_year: month.month_of_year,
        intercalary: month.intercalary,
        day_of_month: ((day_start - month.start_millis) / MILLIS_PER_DAY + 1) as u32,
    })
}

/// Resolve the lunisolar date of an epoch-millisecond instant.
pub fn resolve_epoch_millis<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    epoch_millis: i64,
) -> Result<LunisolarDate, CalendarError> {
    resolve_date(eph, config, jd_from_epoch_millis(epoch_millis))
}
