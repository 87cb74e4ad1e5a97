//! Julian Date ↔ epoch-millisecond conversions and day-boundary truncation.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Milliseconds per day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Julian Date for a moment given as milliseconds from the Unix epoch.
pub fn jd_from_epoch_millis(epoch_millis: i64) -> f64 {
    UNIX_EPOCH_JD + epoch_millis as f64 / MILLIS_PER_DAY as f64
}

/// Milliseconds from the Unix epoch for a Julian Date, rounded to the
/// nearest millisecond.
pub fn epoch_millis_from_jd(jd: f64) -> i64 {
    ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64).round() as i64
}

/// Epoch milliseconds of 00:00 of the civil day containing `jd` at the given
/// fixed UTC offset.
pub fn start_of_day_millis(jd: f64, offset_seconds: i32) -> i64 {
    let offset_millis = offset_seconds as i64 * 1_000;
    let local = epoch_millis_from_jd(jd) + offset_millis;
    local - local.rem_euclid(MILLIS_PER_DAY) - offset_millis
}

/// Days from 1970-01-01 to the given proleptic-Gregorian civil date.
/// Negative for dates before the epoch.
pub(crate) fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64 - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic-Gregorian civil date for a day count from 1970-01-01.
pub(crate) fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = (yoe + era * 400 + i64::from(month <= 2)) as i32;
    (year, month, day)
}

/// Number of days in a month of the proleptic-Gregorian calendar.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
    }
}
