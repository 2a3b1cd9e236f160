use crate::core::layout::pie;
use crate::core::project_pie_wedges;
use crate::render::{RenderFrame, TextHAlign, TextPrimitive, WedgePrimitive};

use super::render_frame_builder::push_title;
use super::{ChartState, ResolvedTheme};

/// Draws nothing at all, title included, when the slices have no positive total.
pub(super) fn append_pie_chart(frame: &mut RenderFrame, state: &ChartState, theme: &ResolvedTheme) {
    let slices = state.series().slices();
    let wedges = project_pie_wedges(slices);
    if wedges.is_empty() {
        return;
    }

    let w = frame.viewport.width_f64();
    let h = frame.viewport.height_f64();
    let center_x = w / 2.0;
    let center_y = h / 2.0;
    let radius = w.min(h) / pie::RADIUS_DIVISOR;
    let label_distance = radius + pie::LABEL_DISTANCE_PX;

    for (slice, wedge) in slices.iter().zip(wedges) {
        frame.wedges.push(WedgePrimitive {
            center_x,
            center_y,
            radius,
            start_angle: wedge.start_angle,
            end_angle: wedge.end_angle,
            fill_color: slice.color,
        });

        let Some(label) = slice.label.as_deref() else {
            continue;
        };
        let middle = wedge.mid_angle();
        let h_align = if wedge.label_on_left() {
            TextHAlign::Right
        } else {
            TextHAlign::Left
        };
        frame.push_text(TextPrimitive::new(
            label,
            center_x + middle.cos() * label_distance,
            center_y + middle.sin() * label_distance,
            pie::LABEL_FONT_PX,
            slice.color,
            h_align,
        ));
    }

    push_title(
        frame,
        state,
        pie::TITLE_H,
        w.min(h) / pie::TITLE_FONT_DIVISOR,
        theme.text,
    );
}
