//! Lunisolar (East Asian) calendar construction engine.
//!
//! Years are built from astronomy rather than tables: solar terms divide the
//! ecliptic into 15° buckets, new moons cut the months, and the count of
//! months between winter solstices decides where the intercalary month goes.
//! Every operation is a pure function of an instant, a [`CalendarConfig`],
//! and an ecliptic-longitude oracle ([`koyomi_ephem::Ephemeris`];
//! [`koyomi_ephem::Orrery`] is the shipped implementation).
//!
//! This crate provides:
//! - Solar-term and new-moon solvers ([`closest_solar_longitude`],
//!   [`latest_new_moon`])
//! - Term sequencing and month building over two solstice-to-solstice
//!   windows
//! - Intercalation and month numbering ([`intercalate`])
//! - Year assembly ([`assemble_year`]) and date resolution
//!   ([`resolve_date`])

pub mod config;
pub mod error;
pub mod intercalation;
pub mod month;
pub mod month_types;
pub mod resolve;
pub mod solver;
pub mod terms;
pub mod terms_types;
pub(crate) mod util;
pub mod year;
pub mod year_types;

pub use config::CalendarConfig;
pub use error::CalendarError;
pub use intercalation::intercalate;
pub use month::{month_candidates, term_first_days};
pub use month_types::{LunarMonth, MonthCandidate};
pub use resolve::{LunisolarDate, resolve_date, resolve_epoch_millis};
pub use solver::{closest_solar_longitude, latest_new_moon, plus_months};
pub use terms::{solar_terms_spanning, spring_equinox, winter_solstice};
pub use terms_types::{SolarTerm, TermKind};
pub use year::{assemble_year, first_day_of_year};
pub use year_types::CalendarYear;
