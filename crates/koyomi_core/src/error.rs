//! Error types for calendar assembly and date resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar assembly or date resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Calendar parameters failed validation.
    InvalidConfig(&'static str),
    /// A solar-term sequence was required but empty.
    EmptyTermSequence,
    /// Fewer than two new-moon day boundaries; no month can be formed.
    EmptyMonthBoundaries,
    /// Too few winter-solstice months found around the anchor.
    NoWinterSolstice,
    /// A solstice-to-solstice window held an impossible number of months.
    ImpossibleMonthCount(usize),
    /// The instant stayed outside the assembled year after re-anchoring.
    UnanchoredYear,
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid calendar config: {msg}"),
            Self::EmptyTermSequence => write!(f, "solar-term sequence is empty"),
            Self::EmptyMonthBoundaries => {
                write!(f, "fewer than two new-moon day boundaries")
            }
            Self::NoWinterSolstice => {
                write!(f, "no winter-solstice month around the anchor")
            }
            Self::ImpossibleMonthCount(count) => {
                write!(f, "solstice window of {count} months (expected 12 or 13)")
            }
            Self::UnanchoredYear => {
                write!(f, "instant is outside the assembled year")
            }
        }
    }
}

impl Error for CalendarError {}
