//! Solar-term sequencing around the winter solstice.

use koyomi_ephem::Ephemeris;

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::solver::{closest_solar_longitude, plus_months};
use crate::terms_types::SolarTerm;
use crate::util::pinned_to_month;

/// Guard for the three-solstice scan; a full sequence is 53 terms.
const TERM_SCAN_LIMIT: usize = 128;

/// The winter-solstice instant (270°) of the offset-civil year containing
/// `julian_date`.
///
/// The solve is seeded from the anchor's civil datetime re-pinned to
/// December, so any anchor within the civil year resolves that year's
/// solstice rather than the nearest one.
pub fn winter_solstice<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    julian_date: f64,
) -> f64 {
    closest_solar_longitude(eph, config, pinned_to_month(config, julian_date, 12), 270.0)
}

/// The spring-equinox instant (0°) of the offset-civil year containing
/// `julian_date`, seeded from an April re-pinning.
pub fn spring_equinox<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    julian_date: f64,
) -> f64 {
    closest_solar_longitude(eph, config, pinned_to_month(config, julian_date, 4), 0.0)
}

/// Solar terms spanning three winter solstices around the anchor.
///
/// Seeds at the 255° pre-climate roughly thirteen months before the anchor
/// year's solstice and walks forward bucket by bucket until the 315° term
/// has appeared three times. The result ascends in time and alternates pre-
/// and mid-climates; the two solstice-to-solstice windows it spans are what
/// intercalation partitions.
pub fn solar_terms_spanning<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    julian_date: f64,
) -> Result<Vec<SolarTerm>, CalendarError> {
    config.validate().map_err(CalendarError::InvalidConfig)?;
    let solstice = winter_solstice(eph, config, julian_date);
    let seed = SolarTerm::of_closest(eph, config, plus_months(config, solstice, -13.0), 255);
    let mut count_315 = usize::from(seed.longitude == 315);
    let mut terms = vec![seed];
    while count_315 != 3 {
        if terms.len() >= TERM_SCAN_LIMIT {
            return Err(CalendarError::NoWinterSolstice);
        }
        let last = terms[terms.len() - 1];
        let next = SolarTerm::of_closest(eph, config, last.julian_date, last.longitude + 15);
        count_315 += usize::from(next.longitude == 315);
        terms.push(next);
    }
    Ok(terms)
}
