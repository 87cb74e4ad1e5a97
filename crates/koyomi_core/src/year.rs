//! Year assembly: term sequence to numbered months to the calendar year.

use koyomi_ephem::Ephemeris;
use koyomi_time::{CivilDateTime, start_of_day_millis};

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::intercalation::intercalate;
use crate::month::{month_candidates, term_first_days};
use crate::solver::{closest_solar_longitude, latest_new_moon, plus_months};
use crate::terms::solar_terms_spanning;
use crate::util::pinned_to_month;
use crate::year_types::CalendarYear;

/// Assemble the calendar year built around `julian_date`.
///
/// The build is raw: the sequence of terms, new moons, and numbered months
/// is taken as solved, and the year keeps the months from the first month
/// numbered 1 through the last month numbered 12. No containment check is
/// made against the anchor; instants early in a civil year belong to the
/// previous lunisolar year, and [`crate::resolve_date`] handles the
/// re-anchoring.
pub fn assemble_year<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    julian_date: f64,
) -> Result<CalendarYear, CalendarError> {
    config.validate().map_err(CalendarError::InvalidConfig)?;
    let terms = solar_terms_spanning(eph, config, julian_date)?;
    let boundaries = term_first_days(eph, config, &terms)?;
    let candidates = month_candidates(&boundaries, &terms)?;
    let numbered = intercalate(config, &candidates)?;

    let january = numbered
        .iter()
        .position(|m| m.month_of_year == 1)
        .ok_or(CalendarError::NoWinterSolstice)?;
    let december = numbered
        .iter()
        .rposition(|m| m.month_of_year == 12)
        .ok_or(CalendarError::NoWinterSolstice)?;
    let months = numbered[january..=december].to_vec();

    let november = months
        .iter()
        .find(|m| m.month_of_year == 11 && !m.intercalary)
        .ok_or(CalendarError::NoWinterSolstice)?;
    let year = CivilDateTime::from_epoch_millis(november.start_millis, config.utc_offset_seconds)
        .year;
    Ok(CalendarYear {
        year,
        first_millis: months[0].start_millis,
        last_millis: months[months.len() - 1].end_millis,
        utc_offset_seconds: config.utc_offset_seconds,
        months,
    })
}

/// Day boundary (epoch millis) of the classical first day of the lunisolar
/// year containing `julian_date`: the start of the new-moon month holding
/// the 330° (雨水) mid-climate.
///
/// Assembly numbers months from the winter-solstice count instead
/// ([`assemble_year`]); around epochs where a new moon and the 330° term
/// share a day neighborhood (2034 is one) the two conventions disagree by a
/// month, and the assembled year is authoritative. This reports the
/// classical boundary.
pub fn first_day_of_year<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    julian_date: f64,
) -> i64 {
    let term = closest_solar_longitude(eph, config, pinned_to_month(config, julian_date, 2), 330.0);
    let term_day = start_of_day_millis(term, config.utc_offset_seconds);
    let new_moon = latest_new_moon(eph, config, term);
    let first_day = start_of_day_millis(new_moon, config.utc_offset_seconds);
    let next_day = start_of_day_millis(
        latest_new_moon(eph, config, plus_months(config, new_moon, 1.0)),
        config.utc_offset_seconds,
    );
    if first_day <= term_day && term_day < next_day {
        first_day
    } else if first_day > term_day {
        start_of_day_millis(
            latest_new_moon(eph, config, plus_months(config, term, -1.0)),
            config.utc_offset_seconds,
        )
    } else {
        next_day
    }
}
