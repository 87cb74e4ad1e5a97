//! Solar ecliptic longitude from a truncated periodic series.
//!
//! Classical low-precision development (the qreki family of almanac
//! routines): a mean-longitude polynomial plus 15 cosine perturbations in
//! Julian centuries TT. Good to a few arcseconds over ±2 centuries, which is
//! orders of magnitude tighter than a day-boundary calendar needs.

use crate::delta_t::julian_centuries_tt;
use crate::util::circulate;

/// Perturbation terms: `[A, A', rate, phase]`, contributing
/// `(A + A'·t) · cos(rate·t + phase)` degrees.
#[rustfmt::skip]
static SUN_TERMS: [[f64; 4]; 15] = [
    //      A        A'        rate      phase
    [ 0.0004,      0.0,     31557.0,   161.0 ],
    [ 0.0004,      0.0,     29930.0,    48.0 ],
    [ 0.0005,      0.0,      2281.0,   221.0 ],
    [ 0.0005,      0.0,       155.0,   118.0 ],
    [ 0.0006,      0.0,     33718.0,   316.0 ],
    [ 0.0007,      0.0,      9037.0,    64.0 ],
    [ 0.0007,      0.0,      3035.0,   110.0 ],
    [ 0.0007,      0.0,     65929.0,    45.0 ],
    [ 0.0013,      0.0,     22519.0,   352.0 ],
    [ 0.0015,      0.0,     45038.0,   254.0 ],
    [ 0.0018,      0.0,    445267.0,   208.0 ],
    [ 0.0018,      0.0,        19.0,   159.0 ],
    [ 0.0020,      0.0,     32964.0,   158.0 ],
    [ 0.0200,      0.0,     71998.1,   265.1 ],
    [ 1.9147,  -0.0048,     35999.05,  267.52],
];

/// Ecliptic longitude of the Sun in degrees in [0, 360), for a UT Julian
/// Date.
pub fn ecliptic_longitude(julian_date: f64) -> f64 {
    let t = julian_centuries_tt(julian_date);
    let mut th = 0.0;
    for row in &SUN_TERMS {
        let ang = circulate(row[2] * t + row[3]);
        th += (row[0] + row[1] * t) * ang.to_radians().cos();
    }
    let ang = circulate(circulate(36_000.7695 * t) + 280.4659);
    circulate(th + ang)
}
