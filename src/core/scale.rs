use serde::{Deserialize, Serialize};

/// Linear mapping from a data range onto a pixel interval.
///
/// `pixel_start` receives `domain_min` and `pixel_end` receives `domain_max`;
/// a pixel interval running downwards (`pixel_end < pixel_start`) gives the
/// usual bottom-up Y axis. A zero-width or non-finite domain maps every value
/// onto `pixel_start` instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMapper {
    domain_min: f64,
    domain_max: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl AxisMapper {
    #[must_use]
    pub fn new(domain_min: f64, domain_max: f64, pixel_start: f64, pixel_end: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            pixel_start,
            pixel_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    /// Returns `true` when the domain span cannot be divided by.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let span = self.domain_max - self.domain_min;
        !span.is_finite() || span == 0.0
    }

    /// Pixels per domain unit, `0.0` for a degenerate domain.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (self.pixel_end - self.pixel_start) / (self.domain_max - self.domain_min)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let mapped = self.pixel_start + (value - self.domain_min) * self.pixels_per_unit();
        if mapped.is_finite() {
            mapped
        } else {
            self.pixel_start
        }
    }

    /// Inverse of [`AxisMapper::map`]; `None` when the mapping is degenerate.
    #[must_use]
    pub fn unmap(self, pixel: f64) -> Option<f64> {
        let per_unit = self.pixels_per_unit();
        if per_unit == 0.0 || !pixel.is_finite() {
            return None;
        }
        Some(self.domain_min + (pixel - self.pixel_start) / per_unit)
    }
}

/// Scales `value` against `max` alone (`value / max * extent`).
///
/// Gauges measure from zero rather than from their configured minimum; a
/// zero or non-finite `max` yields `0.0`.
#[must_use]
pub fn scale_against_max(value: f64, max: f64, extent: f64) -> f64 {
    if max == 0.0 || !max.is_finite() {
        return 0.0;
    }
    let scaled = value * extent / max;
    if scaled.is_finite() { scaled } else { 0.0 }
}
