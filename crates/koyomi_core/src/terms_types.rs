//! Solar-term records.

use koyomi_ephem::Ephemeris;
use koyomi_time::epoch_millis_from_jd;

use crate::config::CalendarConfig;
use crate::solver::closest_solar_longitude;
use crate::util::circulate;

/// Classification of a solar term by its longitude bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// 中気: the bucket is a multiple of 30°. Mid-climates anchor month
    /// numbers; a month without one is eligible for intercalation.
    MidClimate,
    /// 節気: the bucket is an odd multiple of 15°.
    PreClimate,
}

/// A solved solar term: the instant the sun reaches one of the 24 ecliptic
/// longitude buckets spaced 15° apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTerm {
    /// Solved instant, astronomical Julian Date.
    pub julian_date: f64,
    /// Solved instant, milliseconds from the Unix epoch (rounded).
    pub epoch_millis: i64,
    /// Solar ecliptic longitude actually reached, in degrees.
    pub actual_longitude: f64,
    /// Longitude bucket: the actual longitude rounded to a whole degree.
    pub longitude: i32,
    /// Index in the traditional sequence: 0 is 立春 (315°), stepping by 15°.
    pub term_index: i32,
    /// Mid-climate or pre-climate.
    pub kind: TermKind,
}

impl SolarTerm {
    /// Solve the term closest to `julian_date` for the bucket containing
    /// `degree` (snapped down to a multiple of 15).
    ///
    /// The mid/pre classification follows the requested bucket, not the
    /// longitude the solve actually reached.
    pub fn of_closest<E: Ephemeris + ?Sized>(
        eph: &E,
        config: &CalendarConfig,
        julian_date: f64,
        degree: i32,
    ) -> Self {
        let target = 15 * ((degree % 360) / 15);
        let solved = closest_solar_longitude(eph, config, julian_date, f64::from(target));
        let actual_longitude = eph.solar_longitude(solved);
        let longitude = circulate(actual_longitude + 0.5) as i32;
        let term_index = (((f64::from(longitude) + 45.0) / 15.0) as i32) % 24;
        Self {
            julian_date: solved,
            epoch_millis: epoch_millis_from_jd(solved),
            actual_longitude,
            longitude,
            term_index,
            kind: if target % 30 == 0 {
                TermKind::MidClimate
            } else {
                TermKind::PreClimate
            },
        }
    }

    /// Whether this term is a mid-climate (中気).
    pub fn is_mid_climate(&self) -> bool {
        self.kind == TermKind::MidClimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koyomi_ephem::Orrery;
    use koyomi_time::{CivilDateTime, jd_from_epoch_millis};

    fn jd_at(year: i32, month: u32, day: u32) -> f64 {
        let utc = CivilDateTime::new(year, month, day, 0, 0, 0, 0, 0);
        jd_from_epoch_millis(utc.to_epoch_millis())
    }

    #[test]
    fn winter_solstice_term() {
        let config = CalendarConfig::tenpo();
        let term = SolarTerm::of_closest(&Orrery, &config, jd_at(2017, 12, 10), 270);
        assert_eq!(term.longitude, 270);
        assert_eq!(term.term_index, 21);
        assert_eq!(term.kind, TermKind::MidClimate);
        assert!(term.is_mid_climate());
        assert!((term.actual_longitude - 270.0).abs() < 1e-6);
        assert_eq!(term.epoch_millis, epoch_millis_from_jd(term.julian_date));
    }

    #[test]
    fn pre_climate_term() {
        let config = CalendarConfig::tenpo();
        let term = SolarTerm::of_closest(&Orrery, &config, jd_at(2018, 1, 1), 285);
        assert_eq!(term.longitude, 285);
        assert_eq!(term.term_index, 22);
        assert_eq!(term.kind, TermKind::PreClimate);
    }

    #[test]
    fn bucket_315_wraps_to_index_zero() {
        let config = CalendarConfig::tenpo();
        let term = SolarTerm::of_closest(&Orrery, &config, jd_at(2018, 2, 1), 315);
        assert_eq!(term.longitude, 315);
        assert_eq!(term.term_index, 0);
        assert_eq!(term.kind, TermKind::PreClimate);
    }

    #[test]
    fn degree_snaps_down_and_negatives_classify_by_target() {
        let config = CalendarConfig::tenpo();
        // 275 snaps to the 270 bucket.
        let term = SolarTerm::of_closest(&Orrery, &config, jd_at(2017, 12, 10), 275);
        assert_eq!(term.longitude, 270);
        assert_eq!(term.kind, TermKind::MidClimate);
        // -90 stays a mid-climate target and solves at 270.
        let term = SolarTerm::of_closest(&Orrery, &config, jd_at(2017, 12, 10), -90);
        assert_eq!(term.longitude, 270);
        assert_eq!(term.kind, TermKind::MidClimate);
    }

    #[test]
    fn terms_order_by_instant() {
        let config = CalendarConfig::tenpo();
        let solstice = SolarTerm::of_closest(&Orrery, &config, jd_at(2017, 12, 10), 270);
        let cold = SolarTerm::of_closest(&Orrery, &config, solstice.julian_date, 285);
        assert!(solstice.julian_date < cold.julian_date);
        assert!(cold.julian_date - solstice.julian_date < 16.5);
    }
}
