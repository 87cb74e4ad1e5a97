//! Intercalation: window partitioning, leap-month choice, month numbering.

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::month_types::{LunarMonth, MonthCandidate};

/// Number the candidates of the two solstice-to-solstice windows.
///
/// The first three solstice-containing candidates bound the windows:
/// [first, second) and [second, third), each half-open at the next solstice
/// month. Candidates outside both windows are dropped. Within a window of
/// thirteen months the first candidate without a mid-climate becomes the
/// leap month; any later eligible candidate keeps a regular number. The
/// counter starts at 10 so the solstice month opening each window lands on
/// 11, and a leap month repeats its predecessor's number.
pub fn intercalate(
    config: &CalendarConfig,
    candidates: &[MonthCandidate],
) -> Result<Vec<LunarMonth>, CalendarError> {
    let solstice_starts: Vec<i64> = candidates
        .iter()
        .filter(|c| c.contains_winter_solstice())
        .map(|c| c.start_millis)
        .collect();
    if solstice_starts.len() < 3 {
        return Err(CalendarError::NoWinterSolstice);
    }
    let mut months = Vec::new();
    for bounds in solstice_starts.windows(2).take(2) {
        let window: Vec<&MonthCandidate> = candidates
            .iter()
            .filter(|c| bounds[0] <= c.start_millis && c.start_millis < bounds[1])
            .collect();
        months.extend(materialize(config, &window)?);
    }
    Ok(months)
}

/// Number one window of candidates, already ascending by start.
fn materialize(
    config: &CalendarConfig,
    window: &[&MonthCandidate],
) -> Result<Vec<LunarMonth>, CalendarError> {
    if !(12..=13).contains(&window.len()) {
        return Err(CalendarError::ImpossibleMonthCount(window.len()));
    }
    let leap_index = if window.len() > 12 {
        window.iter().position(|c| c.leap_eligible())
    } else {
        None
    };
    tracing::debug!(
        months = window.len(),
        leap_index,
        "numbering solstice window"
    );
    let mut counter = 10_u32;
    let mut months = Vec::with_capacity(window.len());
    for (index, candidate) in window.iter().enumerate() {
        let intercalary = leap_index == Some(index);
        if !intercalary {
            counter += 1;
        }
        months.push(LunarMonth {
            month_of_year: if counter % 12 == 0 { 12 } else { counter % 12 },
            intercalary,
            start_millis: candidate.start_millis,
            end_millis: candidate.end_millis,
            pre_climates: candidate.pre_climates.clone(),
            mid_climates: candidate.mid_climates.clone(),
            utc_offset_seconds: config.utc_offset_seconds,
        });
    }
    Ok(months)
}
