//! Astronomical/civil time plumbing for the lunisolar calendar engine.
//!
//! This crate provides:
//! - Julian Date ↔ epoch-millisecond conversions
//! - Proleptic-Gregorian civil date/time at a fixed UTC offset
//! - Start-of-civil-day truncation (the engine's day-boundary discretization)
//!
//! Everything here is pure integer/float arithmetic; leap seconds are outside
//! the model (the calendar works on the civil UTC timeline).

pub mod civil;
pub mod julian;

pub use civil::CivilDateTime;
pub use julian::{
    J2000_JD, MILLIS_PER_DAY, UNIX_EPOCH_JD, epoch_millis_from_jd, jd_from_epoch_millis,
    start_of_day_millis,
};
