use std::f64::consts::FRAC_PI_2;

use crate::core::layout::{self, TITLE_FONT_H, xy};
use crate::core::{AxisMapper, ChartType, project_line_runs, project_scatter_points};
use crate::render::{DotPrimitive, LinePrimitive, PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::render_frame_builder::push_title;
use super::{ChartState, ResolvedTheme};

/// Pixel geometry of the plot rectangle for line and scatter charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyPlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl XyPlotArea {
    #[must_use]
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            left: xy::PLOT_LEFT_W * width,
            right: xy::PLOT_RIGHT_W * width,
            top: layout::from_bottom(height, xy::PLOT_TOP_H),
            bottom: layout::from_bottom(height, xy::PLOT_BOTTOM_H),
        }
    }

    #[must_use]
    pub fn x_mapper(self, x_min: f64, x_max: f64) -> AxisMapper {
        AxisMapper::new(x_min, x_max, self.left, self.right)
    }

    #[must_use]
    pub fn y_mapper(self, y_min: f64, y_max: f64) -> AxisMapper {
        AxisMapper::new(y_min, y_max, self.bottom, self.top)
    }

    fn x_at(self, fraction: f64) -> f64 {
        self.left + (self.right - self.left) * fraction
    }

    fn y_at(self, fraction: f64) -> f64 {
        self.bottom + (self.top - self.bottom) * fraction
    }
}

pub(super) fn append_xy_chart(frame: &mut RenderFrame, state: &ChartState, theme: &ResolvedTheme) {
    let w = frame.viewport.width_f64();
    let h = frame.viewport.height_f64();
    let config = state.config();
    let area = XyPlotArea::for_canvas(w, h);

    push_title(frame, state, xy::TITLE_H, TITLE_FONT_H * h, theme.text);

    let axis_font = layout::width_scaled_font(w, xy::AXIS_LABEL_FONT);
    if let Some(x_label) = config.x_label.as_deref() {
        frame.push_text(TextPrimitive::new(
            x_label,
            0.5 * w,
            layout::from_bottom(h, xy::X_LABEL_H),
            axis_font,
            theme.text,
            TextHAlign::Center,
        ));
    }
    if let Some(y_label) = config.y_label.as_deref() {
        frame.push_text(
            TextPrimitive::new(
                y_label,
                xy::Y_LABEL_W * w,
                0.5 * h,
                axis_font,
                theme.text,
                TextHAlign::Center,
            )
            .rotated(-FRAC_PI_2),
        );
    }

    frame.lines.push(LinePrimitive::new(
        area.left,
        area.bottom,
        area.right,
        area.bottom,
        xy::AXIS_LINE_WIDTH,
        theme.axis,
    ));
    frame.lines.push(LinePrimitive::new(
        area.left,
        area.top,
        area.left,
        area.bottom,
        xy::AXIS_LINE_WIDTH,
        theme.axis,
    ));

    let tick_font = layout::width_scaled_font(w, xy::TICK_FONT);
    let x_tick_y = layout::from_bottom(h, xy::X_TICK_LABEL_H);
    let y_tick_x = xy::Y_TICK_LABEL_W * w;
    let y_tick_drop = xy::Y_TICK_LABEL_DROP_H * h;
    for fraction in xy::TICK_FRACTIONS {
        let x_value = config.x_min + (config.x_max - config.x_min) * fraction;
        frame.push_text(TextPrimitive::new(
            format!("{x_value:.1}"),
            area.x_at(fraction),
            x_tick_y,
            tick_font,
            theme.text,
            TextHAlign::Center,
        ));

        let y_value = config.y_min + (config.y_max - config.y_min) * fraction;
        frame.push_text(TextPrimitive::new(
            format!("{y_value:.1}"),
            y_tick_x,
            area.y_at(fraction) + y_tick_drop,
            tick_font,
            theme.text,
            TextHAlign::Right,
        ));
    }

    // The 0% gridlines coincide with the axes.
    for fraction in &xy::TICK_FRACTIONS[1..] {
        let y = area.y_at(*fraction);
        frame.lines.push(LinePrimitive::new(
            area.left,
            y,
            area.right,
            y,
            xy::GRID_LINE_WIDTH,
            theme.grid,
        ));
        let x = area.x_at(*fraction);
        frame.lines.push(LinePrimitive::new(
            x,
            area.top,
            x,
            area.bottom,
            xy::GRID_LINE_WIDTH,
            theme.grid,
        ));
    }

    let window = state.data_window();
    let x_axis = area.x_mapper(config.x_min, config.x_max);
    let y_axis = area.y_mapper(config.y_min, config.y_max);
    let points = state.series().points();

    if config.chart_type == ChartType::Scatter {
        for point in project_scatter_points(points, window, x_axis, y_axis) {
            frame.dots.push(DotPrimitive {
                x: point.x,
                y: point.y,
                diameter: xy::SCATTER_DOT_WIDTH,
                color: theme.line,
            });
        }
        return;
    }

    for run in project_line_runs(points, window, x_axis, y_axis) {
        frame.polylines.push(PolylinePrimitive::new(
            run.into_iter().map(|vertex| (vertex.x, vertex.y)).collect(),
            xy::SERIES_LINE_WIDTH,
            theme.line,
        ));
    }
}
