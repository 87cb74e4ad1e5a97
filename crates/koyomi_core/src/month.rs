//! Month building: term instants to new-moon day boundaries to candidates.

use koyomi_ephem::Ephemeris;
use koyomi_time::start_of_day_millis;

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::month_types::MonthCandidate;
use crate::solver::latest_new_moon;
use crate::terms_types::{SolarTerm, TermKind};

/// Day boundaries (epoch millis of 00:00 at the configured offset) of the
/// new moons at or before each term, deduplicated and ascending.
///
/// Consecutive terms usually share a lunation, so the boundary list is
/// roughly half the term list plus one.
pub fn term_first_days<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    terms: &[SolarTerm],
) -> Result<Vec<i64>, CalendarError> {
    if terms.is_empty() {
        return Err(CalendarError::EmptyTermSequence);
    }
    let mut days: Vec<i64> = terms
        .iter()
        .map(|term| {
            let new_moon = latest_new_moon(eph, config, term.julian_date);
            start_of_day_millis(new_moon, config.utc_offset_seconds)
        })
        .collect();
    days.sort_unstable();
    days.dedup();
    Ok(days)
}

/// One candidate per consecutive boundary pair, each ending the millisecond
/// before the next month begins, with the terms whose instants fall inside.
pub fn month_candidates(
    boundaries: &[i64],
    terms: &[SolarTerm],
) -> Result<Vec<MonthCandidate>, CalendarError> {
    if boundaries.len() < 2 {
        return Err(CalendarError::EmptyMonthBoundaries);
    }
    Ok(boundaries
        .windows(2)
        .map(|pair| {
            let start_millis = pair[0];
            let end_millis = pair[1] - 1;
            let collect = |kind: TermKind| {
                terms
                    .iter()
                    .filter(|t| {
                        t.kind == kind
                            && start_millis <= t.epoch_millis
                            && t.epoch_millis <= end_millis
                    })
                    .copied()
                    .collect()
            };
            MonthCandidate {
                start_millis,
                end_millis,
                pre_climates: collect(TermKind::PreClimate),
                mid_climates: collect(TermKind::MidClimate),
            }
        })
        .collect())
}
