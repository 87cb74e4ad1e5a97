//! Calendar construction parameters.

/// Parameters of a mean lunisolar calendar: the astronomical constants the
/// solvers step with, and the civil offset the day grid is anchored to.
///
/// Configs are plain `Copy` records constructed by the caller; there is no
/// process-wide default instance. [`CalendarConfig::tenpo`] is the standard
/// parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarConfig {
    /// Mean tropical year length, in days.
    pub year_length_days: f64,
    /// Mean synodic month length, in days.
    pub month_length_days: f64,
    /// Fixed offset from UTC of the civil day grid, in seconds (east
    /// positive).
    pub utc_offset_seconds: i32,
    /// Solver convergence threshold, in days.
    pub precision_days: f64,
    /// Iteration cap per solve. A capped solve falls back to the candidate
    /// with the smallest recorded correction instead of failing.
    pub max_iterations: u32,
}

impl CalendarConfig {
    /// The 天保暦 (Tenpo) parameter set on Japanese civil time (UTC+9).
    pub fn tenpo() -> Self {
        Self {
            year_length_days: 365.242234,
            month_length_days: 29.530588,
            utc_offset_seconds: 32_400,
            precision_days: 5.0e-10,
            max_iterations: 100,
        }
    }

    /// Check that the parameters can drive the solvers.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.year_length_days.is_finite() || self.year_length_days <= 0.0 {
            return Err("year_length_days must be finite and positive");
        }
        if !self.month_length_days.is_finite() || self.month_length_days <= 0.0 {
            return Err("month_length_days must be finite and positive");
        }
        if !self.precision_days.is_finite() || self.precision_days <= 0.0 {
            return Err("precision_days must be finite and positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1");
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::tenpo()
    }
}
