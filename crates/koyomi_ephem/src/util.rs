//! Shared angle helpers.

/// Wrap a degree value into [0, 360).
pub(crate) fn circulate(degree: f64) -> f64 {
    (degree % 360.0) + if degree < 0.0 { 360.0 } else { 0.0 }
}
