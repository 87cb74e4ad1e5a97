//! Angle and anchor helpers shared by the solvers.

use koyomi_time::{CivilDateTime, epoch_millis_from_jd, jd_from_epoch_millis};

use crate::config::CalendarConfig;

/// Normalize a degree angle into [0, 360).
///
/// Truncated-remainder convention: negative inputs gain one full turn after
/// the remainder, so an exact negative multiple of 360 maps to 360.0 rather
/// than 0.0. The solvers and series were calibrated with this behavior.
pub(crate) fn circulate(degree: f64) -> f64 {
    (degree % 360.0) + if degree < 0.0 { 360.0 } else { 0.0 }
}

/// Recenter a longitude difference into (-180, 180] by at most one turn.
///
/// Inputs are already within one turn of zero, so a single correction step
/// suffices.
pub(crate) fn recenter(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// The Julian Date of `julian_date`'s offset-civil datetime with the month
/// replaced (day-of-month clamped to the new month's length).
///
/// Seeding a solve from a pinned month keeps it inside the anchor's civil
/// year: a December pinning resolves that year's winter solstice no matter
/// where in the year the anchor falls.
pub(crate) fn pinned_to_month(config: &CalendarConfig, julian_date: f64, month: u32) -> f64 {
    let civil = CivilDateTime::from_epoch_millis(
        epoch_millis_from_jd(julian_date),
        config.utc_offset_seconds,
    );
    jd_from_epoch_millis(civil.with_month(month).to_epoch_millis())
}
