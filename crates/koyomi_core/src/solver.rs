//! Iterative solvers for solar-longitude and new-moon instants.
//!
//! Both solvers walk a Julian Date toward the target by mean-motion steps:
//! the angular miss is converted to days at the configured mean rate and
//! subtracted. The date is carried as separate whole and fractional days so
//! the ephemeris argument keeps full resolution over many steps. Convergence
//! is governed by [`CalendarConfig::precision_days`] and capped by
//! [`CalendarConfig::max_iterations`]; a capped solve returns the candidate
//! with the smallest correction recorded along the way rather than failing.

use koyomi_ephem::Ephemeris;

use crate::config::CalendarConfig;
use crate::util::{circulate, recenter};

/// Record a solve candidate, keeping the one with the smallest correction.
/// Equal corrections prefer the later candidate.
pub(crate) fn record_candidate(best: &mut Option<(f64, f64)>, residual: f64, value: f64) {
    match best {
        Some((least, _)) if residual > *least => {}
        _ => *best = Some((residual, value)),
    }
}

/// The best recorded candidate, or `fallback` when nothing was recorded.
pub(crate) fn best_effort(best: Option<(f64, f64)>, fallback: f64) -> f64 {
    match best {
        Some((_, value)) => value,
        None => fallback,
    }
}

/// Instant, as a Julian Date, at which the solar ecliptic longitude reaches
/// `degree` (normalized into [0, 360)), closest to `julian_date`.
///
/// The angular miss is recentered into (-180, 180] each step, so the solve
/// converges on the crossing nearest the seed in either direction.
pub fn closest_solar_longitude<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    julian_date: f64,
    degree: f64,
) -> f64 {
    let expect = circulate(degree);
    let mut numeric = julian_date.trunc();
    let mut floating = julian_date - numeric;
    let mut best: Option<(f64, f64)> = None;
    let mut counter = 0_u32;
    loop {
        let delta = recenter(eph.solar_longitude(numeric + floating) - expect);
        counter += 1;
        let diff = delta * config.year_length_days / 360.0;
        numeric -= diff.trunc();
        floating -= diff - diff.trunc();
        if floating < 0.0 {
            floating += 1.0;
            numeric -= 1.0;
        } else if floating > 1.0 {
            floating -= 1.0;
            numeric += 1.0;
        }
        record_candidate(&mut best, diff.abs(), numeric + floating);
        if diff.abs() <= config.precision_days || counter >= config.max_iterations {
            break;
        }
    }
    if counter < config.max_iterations {
        numeric + floating
    } else {
        tracing::debug!(julian_date, degree, "longitude solve hit the iteration cap");
        best_effort(best, numeric + floating)
    }
}

/// Instant, as a Julian Date, of the new moon at or before `julian_date`.
///
/// Iterates on the elongation (lunar minus solar longitude). After the first
/// step the elongation is held in a band that keeps the walk on the same
/// lunation: values below -15 re-wrap into the circle and values above 345
/// drop a turn, so the solve backs onto the conjunction just passed instead
/// of sliding to an adjacent one.
pub fn latest_new_moon<E: Ephemeris + ?Sized>(
    eph: &E,
    config: &CalendarConfig,
    julian_date: f64,
) -> f64 {
    let mut numeric = julian_date.trunc();
    let mut floating = julian_date - numeric;
    let mut best: Option<(f64, f64)> = None;
    let mut counter = 0_u32;
    loop {
        let mut delta =
            eph.lunar_longitude(numeric + floating) - eph.solar_longitude(numeric + floating);
        if counter == 0 || delta < -15.0 {
            delta = circulate(delta);
        } else if delta > 345.0 {
            delta -= 360.0;
        }
        counter += 1;
        let diff = delta * (config.month_length_days / 360.0);
        let diff_numeric = diff.trunc();
        let diff_floating = diff - diff_numeric;
        numeric -= diff_numeric;
        floating -= diff_floating;
        let residual = (diff_numeric + diff_floating).abs();
        record_candidate(&mut best, residual, numeric + floating);
        if residual <= config.precision_days || counter >= config.max_iterations {
            break;
        }
    }
    if counter < config.max_iterations {
        numeric + floating
    } else {
        tracing::debug!(julian_date, "new-moon solve hit the iteration cap");
        best_effort(best, numeric + floating)
    }
}

/// A Julian Date displaced by a (possibly fractional) number of mean synodic
/// months.
///
/// Only used to seed further solves, so the mean month length is applied
/// without secular correction.
pub fn plus_months(config: &CalendarConfig, julian_date: f64, months: f64) -> f64 {
    julian_date + config.month_length_days * months
}
