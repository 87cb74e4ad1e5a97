//! ΔT (Terrestrial Time − Universal Time) estimation.
//!
//! Piecewise polynomial fits over decimal years, from the Espenak–Meeus
//! long-term expressions (NASA eclipse publications). Input is an
//! astronomical Julian Date on the UT timeline; the decimal year is the UTC
//! calendar year plus `(month − 0.5) / 12`.

use koyomi_time::{CivilDateTime, J2000_JD, epoch_millis_from_jd};

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian centuries of Terrestrial Time since J2000.0 for a UT Julian Date.
pub fn julian_centuries_tt(julian_date: f64) -> f64 {
    (julian_date - J2000_JD + delta_t_days(julian_date)) / DAYS_PER_CENTURY
}

/// ΔT in days, truncated to whole milliseconds.
pub(crate) fn delta_t_days(julian_date: f64) -> f64 {
    (delta_t_seconds(julian_date) * 1_000.0).trunc() / 86_400_000.0
}

/// ΔT in seconds for the given Julian Date.
pub fn delta_t_seconds(julian_date: f64) -> f64 {
    estimate(decimal_year(julian_date))
}

fn decimal_year(julian_date: f64) -> f64 {
    let utc = CivilDateTime::from_epoch_millis(epoch_millis_from_jd(julian_date), 0);
    let year = utc.year - i32::from(utc.year < 0);
    year as f64 + (utc.month as f64 - 0.5) / 12.0
}

fn estimate(y: f64) -> f64 {
    if y < -500.0 || y >= 2150.0 {
        -20.0 + 32.0 * ((y - 1820.0) / 100.0).powi(2)
    } else if y < 500.0 {
        let u = y / 100.0;
        10583.6 - 1014.41 * u + 33.78311 * u.powi(2) - 5.952053 * u.powi(3)
            - 0.1798452 * u.powi(4)
            + 0.022174192 * u.powi(5)
            + 0.0090316521 * u.powi(6)
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        1574.2 - 556.01 * u + 71.23472 * u.powi(2) + 0.319781 * u.powi(3)
            - 0.8503463 * u.powi(4)
            - 0.005050998 * u.powi(5)
            + 0.0083572073 * u.powi(6)
    } else if y < 1700.0 {
        let u = y - 1600.0;
        120.0 - 0.9808 * u - 0.01532 * u.powi(2) + u.powi(3) / 7_129.0
    } else if y < 1800.0 {
        let u = y - 1700.0;
        8.83 + 0.1603 * u - 0.0059285 * u.powi(2) + 0.00013336 * u.powi(3) - u.powi(4) / 1_174_000.0
    } else if y < 1860.0 {
        let u = y - 1800.0;
        13.72 - 0.332447 * u + 0.0068612 * u.powi(2) + 0.0041116 * u.powi(3)
            - 0.00037436 * u.powi(4)
            + 0.0000121272 * u.powi(5)
            - 0.0000001699 * u.powi(6)
            + 0.000000000875 * u.powi(7)
    } else if y < 1900.0 {
        let u = y - 1860.0;
        7.62 + 0.5737 * u - 0.251754 * u.powi(2) + 0.01680668 * u.powi(3)
            - 0.0004473624 * u.powi(4)
            + u.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let u = y - 1900.0;
        -2.79 + 1.494119 * u - 0.0598939 * u.powi(2) + 0.0061966 * u.powi(3)
            - 0.000197 * u.powi(4)
    } else if y < 1941.0 {
        let u = y - 1920.0;
        21.20 + 0.84493 * u - 0.076100 * u.powi(2) + 0.0020936 * u.powi(3)
    } else if y < 1961.0 {
        let u = y - 1950.0;
        29.07 + 0.407 * u - u.powi(2) / 233.0 + u.powi(3) / 2_547.0
    } else if y < 1986.0 {
        let u = y - 1975.0;
        45.45 + 1.067 * u - u.powi(2) / 260.0 - u.powi(3) / 718.0
    } else if y < 2005.0 {
        let u = y - 2000.0;
        63.86 + 0.3345 * u - 0.060374 * u.powi(2) + 0.0017275 * u.powi(3)
            + 0.000651814 * u.powi(4)
            + 0.00002373599 * u.powi(5)
    } else if y < 2050.0 {
        let u = y - 2000.0;
        62.92 + 0.32217 * u + 0.005589 * u.powi(2)
    } else {
        -20.0 + 32.0 * ((y - 1820.0) / 100.0).powi(2) - 0.5628 * (2150.0 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koyomi_time::jd_from_epoch_millis;

    fn jd_of(year: i32, month: u32, day: u32) -> f64 {
        jd_from_epoch_millis(CivilDateTime::new(year, month, day, 0, 0, 0, 0, 0).to_epoch_millis())
    }

    #[test]
    fn decimal_year_uses_month_midpoint() {
        let y = decimal_year(jd_of(2017, 6, 15));
        assert!((y - (2017.0 + 5.5 / 12.0)).abs() < 1e-9, "got {y}");
        let y = decimal_year(jd_of(2017, 1, 1));
        assert!((y - (2017.0 + 0.5 / 12.0)).abs() < 1e-9, "got {y}");
    }

    #[test]
    fn polynomial_anchor_points() {
        // Each fit passes near its reference epoch.
        assert!((estimate(1950.0) - 29.07).abs() < 1e-9);
        assert!((estimate(2000.0) - 63.86).abs() < 1e-9);
        // 2005-2050 fit at its left edge.
        assert!((estimate(2005.0) - 64.670575).abs() < 1e-6);
    }

    #[test]
    fn modern_values_in_published_band() {
        // Observed ΔT: ~69 s (2017), ~64 s (2000), ~57 s (1990).
        let dt = delta_t_seconds(jd_of(2017, 6, 1));
        assert!((68.0..72.0).contains(&dt), "2017: {dt}");
        let dt = delta_t_seconds(jd_of(1990, 6, 1));
        assert!((55.0..60.0).contains(&dt), "1990: {dt}");
    }

    #[test]
    fn monotone_through_range_joins() {
        // No wild jumps where adjacent fits meet.
        for (a, b) in [(1899.9, 1900.1), (1985.9, 1986.1), (2004.9, 2005.1), (2049.9, 2050.1)] {
            let (da, db) = (estimate(a), estimate(b));
            assert!((da - db).abs() < 5.0, "join {a}..{b}: {da} vs {db}");
        }
    }

    #[test]
    fn centuries_offset_by_delta_t() {
        // At J2000 the TT century count is ΔT ahead of zero.
        let t = julian_centuries_tt(J2000_JD);
        assert!(t > 0.0 && t < 1e-4, "got {t}");
    }
}
