use crate::core::layout::column as col;
use crate::core::{ColumnScale, project_columns};
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::render_frame_builder::push_title;
use super::{ChartState, ResolvedTheme};

const TICK_LABEL_COLOR: Color = Color::rgba(0.6, 0.6, 0.6, 0.8);
const TICK_LINE_COLOR: Color = Color::rgba(0.6, 0.6, 0.6, 0.3);

/// Draws nothing at all, title included, without a positive column maximum.
pub(super) fn append_column_chart(frame: &mut RenderFrame, state: &ChartState, theme: &ResolvedTheme) {
    let viewport = frame.viewport;
    let columns = state.series().columns();
    if columns.is_empty() {
        return;
    }
    let Some(scale) = ColumnScale::new(state.series().column_max_value(), viewport) else {
        return;
    };
    let w = viewport.width_f64();
    let h = viewport.height_f64();

    for tick in scale.tick_values(state.config().column_ticks) {
        let y = scale.value_to_y(tick);
        frame.push_text(TextPrimitive::new(
            format!("{tick:.0}"),
            col::TICK_LABEL_X_PX,
            y,
            col::LABEL_FONT_PX,
            TICK_LABEL_COLOR,
            TextHAlign::Left,
        ));
        frame.lines.push(LinePrimitive::new(
            col::GRID_LEFT_PX,
            y,
            w,
            y,
            col::GRID_LINE_WIDTH,
            TICK_LINE_COLOR,
        ));
    }

    let label_y = h - col::LABEL_DROP_W * w + col::LABEL_OFFSET_PX;
    for (column, geometry) in columns.iter().zip(project_columns(columns, scale, viewport)) {
        frame.rects.push(RectPrimitive::new(
            geometry.x,
            geometry.y,
            geometry.width,
            geometry.height,
            column.color,
        ));

        if let Some(label) = column.label.as_deref() {
            frame.push_text(
                TextPrimitive::new(
                    label,
                    geometry.x + geometry.width / 2.0,
                    label_y,
                    col::LABEL_FONT_PX,
                    TICK_LABEL_COLOR,
                    TextHAlign::Center,
                )
                .centered_vertically()
                .rotated(col::LABEL_ROTATION_DEGREES.to_radians()),
            );
        }
    }

    push_title(
        frame,
        state,
        col::TITLE_H,
        w.min(h) / col::TITLE_FONT_DIVISOR,
        theme.text,
    );
}
