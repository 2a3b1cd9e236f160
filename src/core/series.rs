use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::render::Color;

/// One wedge of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub value: f64,
    pub color: Color,
    pub label: Option<String>,
}

/// One bar of a column chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub value: f64,
    pub color: Color,
    pub label: Option<String>,
}

/// Owns every data series a chart can render.
///
/// All three collections are append-only in insertion order. Slices and
/// columns can be edited in place by index; points never change once added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStore {
    points: Vec<DataPoint>,
    slices: Vec<Slice>,
    columns: Vec<Column>,
    #[serde(default)]
    max_points: Option<usize>,
}

impl SeriesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the point series, evicting the oldest points first.
    ///
    /// `None` keeps every point ever plotted.
    pub fn set_max_points(&mut self, max_points: Option<usize>) {
        self.max_points = max_points;
        self.enforce_point_cap();
    }

    #[must_use]
    pub fn max_points(&self) -> Option<usize> {
        self.max_points
    }

    pub fn push_point(&mut self, point: DataPoint) {
        self.points.push(point);
        self.enforce_point_cap();
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    fn enforce_point_cap(&mut self) {
        if let Some(cap) = self.max_points {
            if self.points.len() > cap {
                let excess = self.points.len() - cap;
                self.points.drain(..excess);
            }
        }
    }

    pub fn push_slice(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    #[must_use]
    pub fn slice_mut(&mut self, index: usize) -> Option<&mut Slice> {
        self.slices.get_mut(index)
    }

    /// Sum of all slice values.
    #[must_use]
    pub fn slice_total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// Largest column value, or `0.0` when there are no positive columns.
    #[must_use]
    pub fn column_max_value(&self) -> f64 {
        self.columns
            .iter()
            .map(|column| column.value)
            .fold(0.0, f64::max)
    }
}
