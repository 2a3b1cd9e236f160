use tracing::{trace, warn};

use crate::core::{Column, DataPoint, Slice};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::ChartEngine;

fn ensure_entry_value(kind: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidArgument(format!(
            "{kind} value must be finite and non-negative, got {value}"
        )))
    }
}

fn is_entry_value(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl<R: Renderer> ChartEngine<R> {
    /// Appends one sample to the line/scatter series.
    pub fn plot_point(&mut self, x: f64, y: f64) {
        trace!(x, y, "plot point");
        self.state.series.push_point(DataPoint::new(x, y));
        self.request_redraw();
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.state.series.points()
    }

    pub fn clear_points(&mut self) {
        self.state.series.clear_points();
        self.request_redraw();
    }

    /// Caps how many points are retained; older points are dropped first.
    pub fn set_max_points(&mut self, max_points: Option<usize>) {
        self.state.config.max_points = max_points;
        self.state.series.set_max_points(max_points);
        self.request_redraw();
    }

    #[must_use]
    pub fn max_points(&self) -> Option<usize> {
        self.state.series.max_points()
    }

    /// Appends a pie slice. Nothing is appended when `color` does not parse.
    pub fn add_slice(&mut self, value: f64, color: &str, label: Option<&str>) -> ChartResult<()> {
        ensure_entry_value("slice", value)?;
        let color = Color::parse(color)?;
        self.state.series.push_slice(Slice {
            value,
            color,
            label: label.map(str::to_owned),
        });
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        self.state.series.slices()
    }

    pub fn set_slice_value(&mut self, index: usize, value: f64) -> bool {
        if !is_entry_value(value) {
            warn!(index, value, "rejected slice value");
            return false;
        }
        self.update_slice(index, |slice| slice.value = value)
    }

    pub fn set_slice_color(&mut self, index: usize, color: &str) -> bool {
        let Ok(color) = Color::parse(color) else {
            warn!(index, color, "rejected slice color");
            return false;
        };
        self.update_slice(index, |slice| slice.color = color)
    }

    pub fn set_slice_label(&mut self, index: usize, label: &str) -> bool {
        self.update_slice(index, |slice| slice.label = Some(label.to_owned()))
    }

    fn update_slice(&mut self, index: usize, update: impl FnOnce(&mut Slice)) -> bool {
        let Some(slice) = self.state.series.slice_mut(index) else {
            warn!(
                index,
                len = self.state.series.slices().len(),
                "slice index out of range"
            );
            return false;
        };
        update(slice);
        self.request_redraw();
        true
    }

    /// Appends a column. Nothing is appended when `color` does not parse.
    pub fn add_column(&mut self, value: f64, color: &str, label: Option<&str>) -> ChartResult<()> {
        ensure_entry_value("column", value)?;
        let color = Color::parse(color)?;
        self.state.series.push_column(Column {
            value,
            color,
            label: label.map(str::to_owned),
        });
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.state.series.columns()
    }

    pub fn set_column_value(&mut self, index: usize, value: f64) -> bool {
        if !is_entry_value(value) {
            warn!(index, value, "rejected column value");
            return false;
        }
        self.update_column(index, |column| column.value = value)
    }

    pub fn set_column_color(&mut self, index: usize, color: &str) -> bool {
        let Ok(color) = Color::parse(color) else {
            warn!(index, color, "rejected column color");
            return false;
        };
        self.update_column(index, |column| column.color = color)
    }

    pub fn set_column_label(&mut self, index: usize, label: &str) -> bool {
        self.update_column(index, |column| column.label = Some(label.to_owned()))
    }

    /// Largest column value, `0.0` when there are no positive columns.
    #[must_use]
    pub fn column_max_value(&self) -> f64 {
        self.state.series.column_max_value()
    }

    fn update_column(&mut self, index: usize, update: impl FnOnce(&mut Column)) -> bool {
        let Some(column) = self.state.series.column_mut(index) else {
            warn!(
                index,
                len = self.state.series.columns().len(),
                "column index out of range"
            );
            return false;
        };
        update(column);
        self.request_redraw();
        true
    }
}
