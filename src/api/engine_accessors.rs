use tracing::warn;

use crate::core::ChartType;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::{ChartConfig, ChartEngine, ColorRole};

fn ensure_finite(name: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidArgument(format!("{name} must be finite")))
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.state.config
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.state.config.chart_type
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.state.config.chart_type = chart_type;
        self.request_redraw();
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.state.config.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.config.title = Some(title.into());
        self.request_redraw();
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.state.config.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.state.config.label = Some(label.into());
        self.request_redraw();
    }

    #[must_use]
    pub fn x_label(&self) -> Option<&str> {
        self.state.config.x_label.as_deref()
    }

    pub fn set_x_label(&mut self, x_label: impl Into<String>) {
        self.state.config.x_label = Some(x_label.into());
        self.request_redraw();
    }

    #[must_use]
    pub fn y_label(&self) -> Option<&str> {
        self.state.config.y_label.as_deref()
    }

    pub fn set_y_label(&mut self, y_label: impl Into<String>) {
        self.state.config.y_label = Some(y_label.into());
        self.request_redraw();
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.state.config.x_min
    }

    pub fn set_x_min(&mut self, x_min: f64) -> ChartResult<()> {
        ensure_finite("x_min", x_min)?;
        self.state.config.x_min = x_min;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.state.config.x_max
    }

    pub fn set_x_max(&mut self, x_max: f64) -> ChartResult<()> {
        ensure_finite("x_max", x_max)?;
        self.state.config.x_max = x_max;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.state.config.y_min
    }

    pub fn set_y_min(&mut self, y_min: f64) -> ChartResult<()> {
        ensure_finite("y_min", y_min)?;
        self.state.config.y_min = y_min;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.state.config.y_max
    }

    pub fn set_y_max(&mut self, y_max: f64) -> ChartResult<()> {
        ensure_finite("y_max", y_max)?;
        self.state.config.y_max = y_max;
        self.request_redraw();
        Ok(())
    }

    /// Moves the visible X window in one step, e.g. to scroll with new data.
    pub fn set_x_range(&mut self, x_min: f64, x_max: f64) -> ChartResult<()> {
        ensure_finite("x_min", x_min)?;
        ensure_finite("x_max", x_max)?;
        self.state.config.x_min = x_min;
        self.state.config.x_max = x_max;
        self.request_redraw();
        Ok(())
    }

    pub fn set_y_range(&mut self, y_min: f64, y_max: f64) -> ChartResult<()> {
        ensure_finite("y_min", y_min)?;
        ensure_finite("y_max", y_max)?;
        self.state.config.y_min = y_min;
        self.state.config.y_max = y_max;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn width_hint(&self) -> u32 {
        self.state.config.width_hint
    }

    pub fn set_width(&mut self, width: u32) {
        self.state.config.width_hint = width;
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.state.value
    }

    pub fn set_value(&mut self, value: f64) -> ChartResult<()> {
        ensure_finite("value", value)?;
        self.state.value = value;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn value_min(&self) -> f64 {
        self.state.config.value_min
    }

    pub fn set_value_min(&mut self, value_min: f64) -> ChartResult<()> {
        ensure_finite("value_min", value_min)?;
        self.state.config.value_min = value_min;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn value_max(&self) -> f64 {
        self.state.config.value_max
    }

    pub fn set_value_max(&mut self, value_max: f64) -> ChartResult<()> {
        ensure_finite("value_max", value_max)?;
        self.state.config.value_max = value_max;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn column_ticks(&self) -> u32 {
        self.state.config.column_ticks
    }

    /// Sets how many intervals the column chart's gridlines divide the
    /// value axis into. Zero is treated as one.
    pub fn set_column_ticks(&mut self, ticks: u32) {
        self.state.config.column_ticks = ticks.max(1);
        self.request_redraw();
    }

    #[must_use]
    pub fn font_family(&self) -> Option<&str> {
        self.state.config.font_family.as_deref()
    }

    pub fn set_font(&mut self, font_family: impl Into<String>) {
        self.state.config.font_family = Some(font_family.into());
        self.request_redraw();
    }

    #[must_use]
    pub fn theme_color(&self, role: ColorRole) -> Option<Color> {
        self.state.config.theme.get(role)
    }

    /// Sets a theme color from a textual spec.
    ///
    /// Returns `false` and keeps the previous color when `spec` does not
    /// parse.
    pub fn set_color(&mut self, role: ColorRole, spec: &str) -> bool {
        match Color::parse(spec) {
            Ok(color) => {
                self.set_color_value(role, color);
                true
            }
            Err(err) => {
                warn!(%role, %err, "rejected theme color");
                false
            }
        }
    }

    pub fn set_color_value(&mut self, role: ColorRole, color: Color) {
        self.state.config.theme.set(role, Some(color));
        self.request_redraw();
    }
}
