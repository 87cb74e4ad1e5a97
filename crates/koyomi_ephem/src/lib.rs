//! Ecliptic-longitude ephemeris for the lunisolar calendar engine.
//!
//! This crate provides:
//! - The [`Ephemeris`] oracle trait the engine solves against
//! - [`Orrery`], a self-contained implementation from truncated periodic
//!   series (solar: 15 perturbation terms, lunar: 61)
//! - ΔT (Terrestrial − Universal time) estimation polynomials
//!
//! Accuracy is on the order of arcminutes, which bounds solved event times
//! to roughly a minute; day-boundary calendars tolerate far more.

pub mod delta_t;
pub mod moon;
pub mod sun;
pub(crate) mod util;

pub use delta_t::{delta_t_seconds, julian_centuries_tt};

/// Source of solar and lunar ecliptic longitudes, in degrees in [0, 360),
/// by astronomical Julian Date on the UT timeline.
pub trait Ephemeris {
    fn solar_longitude(&self, julian_date: f64) -> f64;
    fn lunar_longitude(&self, julian_date: f64) -> f64;
}

impl<T: Ephemeris + ?Sized> Ephemeris for &T {
    fn solar_longitude(&self, julian_date: f64) -> f64 {
        (**self).solar_longitude(julian_date)
    }

    fn lunar_longitude(&self, julian_date: f64) -> f64 {
        (**self).lunar_longitude(julian_date)
    }
}

/// The shipped series ephemeris.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orrery;

impl Ephemeris for Orrery {
    fn solar_longitude(&self, julian_date: f64) -> f64 {
        sun::ecliptic_longitude(julian_date)
    }

    fn lunar_longitude(&self, julian_date: f64) -> f64 {
        moon::ecliptic_longitude(julian_date)
    }
}
