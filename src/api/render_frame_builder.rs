use tracing::debug;

use crate::core::layout::{self, TITLE_FONT_H, unknown};
use crate::core::{ChartType, Viewport};
use crate::render::{Color, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartState, ResolvedTheme};
use super::{
    column_render_frame_builder, gauge_render_frame_builder, number_render_frame_builder,
    pie_render_frame_builder, xy_render_frame_builder,
};

/// Builds the complete frame for the chart's current type.
pub(crate) fn build_render_frame(
    state: &ChartState,
    viewport: Viewport,
    theme: &ResolvedTheme,
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport).with_font_family(theme.font_family.clone());
    let chart_type = state.config().chart_type;

    match chart_type {
        ChartType::Line | ChartType::Scatter => {
            xy_render_frame_builder::append_xy_chart(&mut frame, state, theme);
        }
        ChartType::Number => number_render_frame_builder::append_number_chart(&mut frame, state, theme),
        ChartType::GaugeLinear => {
            gauge_render_frame_builder::append_linear_gauge(&mut frame, state, theme);
        }
        ChartType::GaugeAngular => {
            gauge_render_frame_builder::append_angular_gauge(&mut frame, state, theme);
        }
        ChartType::Pie => pie_render_frame_builder::append_pie_chart(&mut frame, state, theme),
        ChartType::Column => column_render_frame_builder::append_column_chart(&mut frame, state, theme),
        ChartType::Unknown => append_unknown_chart(&mut frame, theme),
    }

    debug!(
        ?chart_type,
        width = viewport.width,
        height = viewport.height,
        primitives = frame.primitive_count(),
        "built render frame"
    );
    frame
}

fn append_unknown_chart(frame: &mut RenderFrame, theme: &ResolvedTheme) {
    let w = frame.viewport.width_f64();
    let h = frame.viewport.height_f64();
    frame.push_text(
        TextPrimitive::new(
            unknown::MESSAGE,
            0.5 * w,
            layout::from_bottom(h, unknown::MESSAGE_H),
            TITLE_FONT_H * h,
            theme.text,
            TextHAlign::Center,
        )
        .centered_vertically(),
    );
}

/// Horizontally centered text, vertically centered on `y`.
pub(super) fn centered_text(
    text: Option<&str>,
    x: f64,
    y: f64,
    font_size_px: f64,
    color: Color,
) -> Option<TextPrimitive> {
    let text = text.filter(|text| !text.is_empty())?;
    Some(TextPrimitive::new(text, x, y, font_size_px, color, TextHAlign::Center).centered_vertically())
}

/// Pushes the chart title centered at `height_fraction` from the bottom.
pub(super) fn push_title(
    frame: &mut RenderFrame,
    state: &ChartState,
    height_fraction: f64,
    font_size_px: f64,
    color: Color,
) {
    let w = frame.viewport.width_f64();
    let h = frame.viewport.height_f64();
    if let Some(title) = centered_text(
        state.config().title.as_deref(),
        0.5 * w,
        layout::from_bottom(h, height_fraction),
        font_size_px,
        color,
    ) {
        frame.push_text(title);
    }
}
