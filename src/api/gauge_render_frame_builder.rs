use std::f64::consts::PI;

use crate::core::layout::{self, TITLE_FONT_H, gauge_angular as angular, gauge_linear as linear};
use crate::core::scale_against_max;
use crate::render::{ArcPrimitive, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::render_frame_builder::{centered_text, push_title};
use super::{ChartState, ResolvedTheme};

/// Length in pixels of the linear gauge bar.
///
/// The bar grows from zero, scaled against `value_max` only.
#[must_use]
pub fn linear_gauge_bar_length(value: f64, value_max: f64, canvas_height: f64) -> f64 {
    let extent = (linear::BAR_TOP_H - linear::BAR_BASE_H) * canvas_height;
    scale_against_max(value, value_max, extent)
}

/// Sweep of the angular gauge arc in degrees, scaled against `value_max` only.
#[must_use]
pub fn angular_gauge_sweep_degrees(value: f64, value_max: f64) -> f64 {
    scale_against_max(value, value_max, angular::SWEEP_DEGREES)
}

pub(super) fn append_linear_gauge(frame: &mut RenderFrame, state: &ChartState, theme: &ResolvedTheme) {
    let w = frame.viewport.width_f64();
    let h = frame.viewport.height_f64();
    let config = state.config();
    let label_font = layout::width_scaled_font(w, linear::LABEL_FONT);

    push_title(frame, state, linear::TITLE_H, TITLE_FONT_H * h, theme.text);
    if let Some(label) = centered_text(
        config.label.as_deref(),
        0.5 * w,
        layout::from_bottom(h, linear::LABEL_H),
        label_font,
        theme.text,
    ) {
        frame.push_text(label);
    }

    let base_y = layout::from_bottom(h, linear::BAR_BASE_H);
    let top_y = layout::from_bottom(h, linear::BAR_TOP_H);
    for (limit, y) in [(config.value_min, base_y), (config.value_max, top_y)] {
        frame.push_text(
            TextPrimitive::new(
                format!("{limit:.0}"),
                linear::LIMIT_LABEL_W * w,
                y,
                label_font,
                theme.text,
                TextHAlign::Left,
            )
            .centered_vertically(),
        );
        frame.lines.push(LinePrimitive::new(
            linear::LIMIT_LINE_LEFT_W * w,
            y,
            linear::LIMIT_LINE_RIGHT_W * w,
            y,
            linear::LIMIT_LINE_WIDTH,
            theme.axis,
        ));
    }

    let bar_x = linear::BAR_CENTER_W * w;
    let length = linear_gauge_bar_length(state.value(), config.value_max, h);
    frame.lines.push(LinePrimitive::new(
        bar_x,
        base_y,
        bar_x,
        base_y - length,
        linear::BAR_WIDTH_W * w,
        theme.line,
    ));
}

pub(super) fn append_angular_gauge(frame: &mut RenderFrame, state: &ChartState, theme: &ResolvedTheme) {
    let w = frame.viewport.width_f64();
    let h = frame.viewport.height_f64();
    let config = state.config();
    let label_font = layout::width_scaled_font(w, angular::LABEL_FONT);

    push_title(frame, state, angular::TITLE_H, TITLE_FONT_H * h, theme.text);
    if let Some(label) = centered_text(
        config.label.as_deref(),
        0.5 * w,
        layout::from_bottom(h, angular::LABEL_H),
        label_font,
        theme.text,
    ) {
        frame.push_text(label);
    }

    let limit_y = layout::from_bottom(h, angular::LIMIT_H);
    frame.push_text(
        TextPrimitive::new(
            format!("{:.0}", config.value_min),
            angular::MIN_LABEL_W * w,
            limit_y,
            label_font,
            theme.text,
            TextHAlign::Left,
        )
        .centered_vertically(),
    );
    frame.push_text(
        TextPrimitive::new(
            format!("{:.0}", config.value_max),
            angular::MAX_LABEL_W * w,
            limit_y,
            label_font,
            theme.text,
            TextHAlign::Right,
        )
        .centered_vertically(),
    );
    for (left, right) in [
        (angular::MIN_LINE_LEFT_W, angular::MIN_LINE_RIGHT_W),
        (angular::MAX_LINE_LEFT_W, angular::MAX_LINE_RIGHT_W),
    ] {
        frame.lines.push(LinePrimitive::new(
            left * w,
            limit_y,
            right * w,
            limit_y,
            angular::LIMIT_LINE_WIDTH,
            theme.axis,
        ));
    }

    // Starts at the 9 o'clock position and sweeps clockwise over the top.
    let sweep = angular_gauge_sweep_degrees(state.value(), config.value_max).to_radians();
    frame.arcs.push(ArcPrimitive {
        center_x: angular::ARC_CENTER_W * w,
        center_y: layout::from_bottom(h, angular::ARC_CENTER_H),
        radius: angular::ARC_RADIUS_W * w,
        start_angle: PI,
        end_angle: PI + sweep,
        stroke_width: angular::ARC_WIDTH_W * w,
        color: theme.line,
    });
}
