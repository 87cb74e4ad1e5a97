//! Golden tests for date resolution.
//!
//! Fixture strings follow the 年閏月日 rendering; the J2000 and Unix-epoch
//! cases land in January, before their lunisolar new year, and exercise the
//! single re-anchoring pass.

use koyomi_core::{CalendarConfig, LunisolarDate, resolve_date, resolve_epoch_millis};
use koyomi_ephem::Orrery;
use koyomi_time::{CivilDateTime, jd_from_epoch_millis};

const JST: i32 = 9 * 3_600;

fn resolve_at(year: i32, month: u32, day: u32) -> LunisolarDate {
    let config = CalendarConfig::tenpo();
    let civil = CivilDateTime::new(year, month, day, 0, 0, 0, 0, JST);
    resolve_date(
        &Orrery,
        &config,
        jd_from_epoch_millis(civil.to_epoch_millis()),
    )
    .unwrap()
}

#[test]
fn j2000_resolves_into_the_previous_lunisolar_year() {
    let config = CalendarConfig::tenpo();
    let date = resolve_date(&Orrery, &config, 2_451_545.0).unwrap();
    assert_eq!(date.to_string(), "1999年11月25日");
}

#[test]
fn unix_epoch_resolves_into_the_previous_lunisolar_year() {
    let config = CalendarConfig::tenpo();
    let date = resolve_epoch_millis(&Orrery, &config, 0).unwrap();
    assert_eq!(date.to_string(), "1969年11月24日");
    assert_eq!(
        date,
        LunisolarDate {
            year: 1969,
            month_of_year: 11,
            intercalary: false,
            day_of_month: 24,
        }
    );
}

#[test]
fn leap_month_days_of_2017() {
    assert_eq!(resolve_at(2017, 6, 24).to_string(), "2017年閏5月1日");
    assert_eq!(resolve_at(2017, 7, 22).to_string(), "2017年閏5月29日");
    assert_eq!(resolve_at(2017, 7, 23).to_string(), "2017年6月1日");
}

#[test]
fn leap_month_eleven_of_2033_spans_the_civil_new_year() {
    assert_eq!(resolve_at(2033, 12, 22).to_string(), "2033年閏11月1日");
    assert_eq!(resolve_at(2033, 12, 31).to_string(), "2033年閏11月10日");
    assert_eq!(resolve_at(2034, 1, 1).to_string(), "2033年閏11月11日");
    assert_eq!(resolve_at(2034, 1, 19).to_string(), "2033年閏11月29日");
}

#[test]
fn new_year_days_resolve_on_both_sides() {
    // The day before 2017's first day belongs to 2016's month 12.
    assert_eq!(resolve_at(2017, 1, 28).to_string(), "2017年1月1日");
    assert_eq!(resolve_at(2017, 1, 27).to_string(), "2016年12月30日");
}
