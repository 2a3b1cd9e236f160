use serde::{Deserialize, Serialize};

use crate::core::layout::{self, column as col};
use crate::core::{Column, Viewport};

/// Pixel rectangle of one column, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical scale shared by columns and their tick gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnScale {
    pub max_value: f64,
    pub baseline_y: f64,
    pub pixels_per_unit: f64,
}

impl ColumnScale {
    /// `None` when nothing positive is there to scale against.
    #[must_use]
    pub fn new(max_value: f64, viewport: Viewport) -> Option<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return None;
        }
        let height = viewport.height_f64();
        let usable = height - col::BASELINE_H * height - col::TOP_MARGIN_H * height;
        let pixels_per_unit = usable / max_value;
        if !pixels_per_unit.is_finite() {
            return None;
        }
        Some(Self {
            max_value,
            baseline_y: layout::from_bottom(height, col::BASELINE_H),
            pixels_per_unit,
        })
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.baseline_y - value * self.pixels_per_unit
    }

    /// `ticks + 1` evenly spaced values from zero to the maximum.
    #[must_use]
    pub fn tick_values(self, ticks: u32) -> Vec<f64> {
        let ticks = ticks.max(1);
        let step = self.max_value / f64::from(ticks);
        (0..=ticks).map(|i| f64::from(i) * step).collect()
    }
}

/// Lays columns out left-to-right with a uniform width and equal gaps.
///
/// A gap of `GAP_W * width` precedes every column and follows the last one.
/// Columns too short to see (including zero values) keep a minimum
/// visible height.
#[must_use]
pub fn project_columns(
    columns: &[Column],
    scale: ColumnScale,
    viewport: Viewport,
) -> Vec<ColumnGeometry> {
    if columns.is_empty() {
        return Vec::new();
    }

    let width = viewport.width_f64();
    let gap = col::GAP_W * width;
    let count = columns.len() as f64;
    let column_width = ((width - gap * (count + 1.0)) / count).max(0.0);

    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let mut height = column.value * scale.pixels_per_unit;
            if height.is_nan() || height < col::MIN_HEIGHT_PX {
                height = col::MIN_HEIGHT_PX;
            }
            ColumnGeometry {
                x: gap + index as f64 * (column_width + gap),
                y: scale.baseline_y - height,
                width: column_width,
                height,
            }
        })
        .collect()
}
