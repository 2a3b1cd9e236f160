use serde::{Deserialize, Serialize};

use crate::core::{AxisMapper, DataPoint};

/// Data-space rectangle a line or scatter chart currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataWindow {
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Inclusive on all four edges.
    #[must_use]
    pub fn contains(self, point: DataPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}

/// Pixel-space vertex of a projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Splits `points` into runs of consecutive in-window samples.
///
/// A point outside `window` ends the current run; the next visible point
/// starts a new one, so no segment ever bridges an out-of-window gap. A run
/// may hold a single vertex.
#[must_use]
pub fn project_line_runs(
    points: &[DataPoint],
    window: DataWindow,
    x_axis: AxisMapper,
    y_axis: AxisMapper,
) -> Vec<Vec<PixelPoint>> {
    let mut runs: Vec<Vec<PixelPoint>> = Vec::new();
    let mut previous_visible = false;

    for point in points {
        if !window.contains(*point) {
            previous_visible = false;
            continue;
        }

        let vertex = PixelPoint {
            x: x_axis.map(point.x),
            y: y_axis.map(point.y),
        };
        match runs.last_mut() {
            Some(run) if previous_visible => run.push(vertex),
            _ => runs.push(vec![vertex]),
        }
        previous_visible = true;
    }

    runs
}

/// Projects every in-window point independently, skipping the rest.
#[must_use]
pub fn project_scatter_points(
    points: &[DataPoint],
    window: DataWindow,
    x_axis: AxisMapper,
    y_axis: AxisMapper,
) -> Vec<PixelPoint> {
    points
        .iter()
        .filter(|point| window.contains(**point))
        .map(|point| PixelPoint {
            x: x_axis.map(point.x),
            y: y_axis.map(point.y),
        })
        .collect()
}
