use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::core::Slice;

/// Angular extent of one slice in radians, clockwise from the positive X axis
/// in top-left pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgeGeometry {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl WedgeGeometry {
    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn mid_angle(self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }

    /// Labels whose mid-angle points into the left half-plane are laid out
    /// right-to-left so they extend away from the pie.
    #[must_use]
    pub fn label_on_left(self) -> bool {
        let mid = self.mid_angle();
        mid > FRAC_PI_2 && mid < 3.0 * PI / 2.0
    }
}

/// Lays slices out in insertion order starting at angle zero.
///
/// Each slice covers `value / total` of the full turn. Returns no wedges
/// when the total is not strictly positive.
#[must_use]
pub fn project_pie_wedges(slices: &[Slice]) -> Vec<WedgeGeometry> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    let mut start_angle = 0.0;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.value / total * TAU;
            let wedge = WedgeGeometry {
                start_angle,
                end_angle: start_angle + sweep,
            };
            start_angle += sweep;
            wedge
        })
        .collect()
}
