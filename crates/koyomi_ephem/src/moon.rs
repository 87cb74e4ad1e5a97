//! Lunar ecliptic longitude from a truncated periodic series.
//!
//! Same family as the solar development: a mean-longitude polynomial plus 61
//! cosine perturbations in Julian centuries TT. Worst-case error is well
//! under an arcminute over ±2 centuries; the Moon covers that in about two
//! seconds of time.

use crate::delta_t::julian_centuries_tt;
use crate::util::circulate;

/// Perturbation terms: `[A, rate, phase]`, contributing
/// `A · cos(rate·t + phase)` degrees.
#[rustfmt::skip]
static MOON_TERMS: [[f64; 3]; 61] = [
    //      A         rate        phase
    [ 6.2888,    477198.868,    44.963],
    [ 1.2740,    413335.35,     10.74 ],
    [ 0.6583,    890534.22,    145.7  ],
    [ 0.2136,    954397.74,    179.93 ],
    [ 0.1851,     35999.05,     87.53 ],
    [ 0.1144,    966404.0,     276.5  ],
    [ 0.0588,     63863.5,     124.2  ],
    [ 0.0571,    377336.3,      13.2  ],
    [ 0.0533,   1367733.1,     280.7  ],
    [ 0.0458,    854535.2,     148.2  ],
    [ 0.0409,    441199.8,      47.4  ],
    [ 0.0347,    445267.1,      27.9  ],
    [ 0.0304,    513197.9,     222.5  ],
    [ 0.0154,     75870.0,      41.0  ],
    [ 0.0125,   1443603.0,      52.0  ],
    [ 0.0110,    489205.0,     142.0  ],
    [ 0.0107,   1303870.0,     246.0  ],
    [ 0.0100,   1431597.0,     315.0  ],
    [ 0.0085,    826671.0,     111.0  ],
    [ 0.0079,    449334.0,     188.0  ],
    [ 0.0068,    926533.0,     323.0  ],
    [ 0.0052,     31932.0,     107.0  ],
    [ 0.0050,    481266.0,     205.0  ],
    [ 0.0040,   1331734.0,     283.0  ],
    [ 0.0040,   1844932.0,      56.0  ],
    [ 0.0040,       133.0,      29.0  ],
    [ 0.0038,   1781068.0,      21.0  ],
    [ 0.0037,    541062.0,     259.0  ],
    [ 0.0028,      1934.0,     145.0  ],
    [ 0.0027,    918399.0,     182.0  ],
    [ 0.0026,   1379739.0,      17.0  ],
    [ 0.0024,     99863.0,     122.0  ],
    [ 0.0023,    922466.0,     163.0  ],
    [ 0.0022,    818536.0,     151.0  ],
    [ 0.0021,    990397.0,     357.0  ],
    [ 0.0021,     71998.0,      85.0  ],
    [ 0.0021,    341337.0,      16.0  ],
    [ 0.0018,    401329.0,     274.0  ],
    [ 0.0016,   1856938.0,     152.0  ],
    [ 0.0012,   1267871.0,     249.0  ],
    [ 0.0011,   1920802.0,     186.0  ],
    [ 0.0009,    858602.0,     129.0  ],
    [ 0.0008,   1403732.0,      98.0  ],
    [ 0.0007,    790672.0,     114.0  ],
    [ 0.0007,    405201.0,      50.0  ],
    [ 0.0007,    485333.0,     186.0  ],
    [ 0.0007,     27864.0,     127.0  ],
    [ 0.0006,    111869.0,      38.0  ],
    [ 0.0006,   2258267.0,     156.0  ],
    [ 0.0005,   1908795.0,      90.0  ],
    [ 0.0005,   1745069.0,      24.0  ],
    [ 0.0005,    509131.0,     242.0  ],
    [ 0.0004,     39871.0,     223.0  ],
    [ 0.0004,     12006.0,     187.0  ],
    [ 0.0003,    958465.0,     340.0  ],
    [ 0.0003,    381404.0,     354.0  ],
    [ 0.0003,    349472.0,     337.0  ],
    [ 0.0003,   1808933.0,      58.0  ],
    [ 0.0003,    549197.0,     220.0  ],
    [ 0.0003,      4067.0,      70.0  ],
    [ 0.0003,   2322131.0,     191.0  ],
];

/// Ecliptic longitude of the Moon in degrees in [0, 360), for a UT Julian
/// Date.
pub fn ecliptic_longitude(julian_date: f64) -> f64 {
    let t = julian_centuries_tt(julian_date);
    let mut th = 0.0;
    for row in &MOON_TERMS {
        let ang = circulate(row[1] * t + row[2]);
        th += row[0] * ang.to_radians().cos();
    }
    let ang = circulate(circulate(481_267.8809 * t) + 218.3162);
    circulate(th + ang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sun;
    use koyomi_time::CivilDateTime;
    use koyomi_time::jd_from_epoch_millis;

    fn jd_of(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
        jd_from_epoch_millis(
            CivilDateTime::new(year, month, day, hour, minute, 0, 0, 0).to_epoch_millis(),
        )
    }

    fn signed_gap(a: f64, b: f64) -> f64 {
        let mut d = a - b;
        if d > 180.0 {
            d -= 360.0;
        } else if d < -180.0 {
            d += 360.0;
        }
        d
    }

    #[test]
    fn conjunction_2017_january() {
        // New moon 2017-01-28 00:07 UTC.
        let jd = jd_of(2017, 1, 28, 0, 7);
        let gap = signed_gap(ecliptic_longitude(jd), sun::ecliptic_longitude(jd));
        assert!(gap.abs() < 0.2, "elongation {gap}");
    }

    #[test]
    fn conjunction_2017_june() {
        // New moon 2017-06-24 02:31 UTC, first day of the leap month.
        let jd = jd_of(2017, 6, 24, 2, 31);
        let gap = signed_gap(ecliptic_longitude(jd), sun::ecliptic_longitude(jd));
        assert!(gap.abs() < 0.2, "elongation {gap}");
    }

    #[test]
    fn opposition_2017_december() {
        // Full moon 2017-12-03 15:47 UTC.
        let jd = jd_of(2017, 12, 3, 15, 47);
        let gap = signed_gap(
            ecliptic_longitude(jd),
            sun::ecliptic_longitude(jd) + 180.0,
        );
        assert!(gap.abs() < 0.2, "elongation from opposition {gap}");
    }

    #[test]
    fn mean_daily_motion() {
        let start = jd_of(2020, 4, 1, 0, 0);
        let mut travelled = 0.0;
        for i in 0..10 {
            let a = ecliptic_longitude(start + i as f64);
            let b = ecliptic_longitude(start + i as f64 + 1.0);
            travelled += signed_gap(b, a);
        }
        let rate = travelled / 10.0;
        assert!((rate - 13.18).abs() < 2.0, "got {rate}");
    }

    #[test]
    fn always_in_circle() {
        for i in 0..400 {
            let lon = ecliptic_longitude(2_451_545.0 + i as f64 * 17.75);
            assert!((0.0..360.0).contains(&lon), "step {i}: {lon}");
        }
    }
}
