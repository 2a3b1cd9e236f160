use crate::core::layout::{self, TITLE_FONT_H, number};
use crate::render::RenderFrame;

use super::render_frame_builder::{centered_text, push_title};
use super::{ChartState, ResolvedTheme};

pub(super) fn append_number_chart(frame: &mut RenderFrame, state: &ChartState, theme: &ResolvedTheme) {
    let w = frame.viewport.width_f64();
    let h = frame.viewport.height_f64();

    push_title(frame, state, number::TITLE_H, TITLE_FONT_H * h, theme.text);

    if let Some(label) = centered_text(
        state.config().label.as_deref(),
        0.5 * w,
        layout::from_bottom(h, number::LABEL_H),
        layout::width_scaled_font(w, number::LABEL_FONT),
        theme.text,
    ) {
        frame.push_text(label);
    }

    let value = format!("{:.1}", state.value());
    if let Some(value) = centered_text(
        Some(value.as_str()),
        0.5 * w,
        layout::from_bottom(h, number::VALUE_H),
        layout::width_scaled_font(w, number::VALUE_FONT),
        theme.text,
    ) {
        frame.push_text(value);
    }
}
