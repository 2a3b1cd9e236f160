//! Fixed canvas fractions reserved for chrome by each chart type.
//!
//! Fractions are relative to the canvas width (`*_W`) or height (`*_H`).
//! Vertical fractions are measured from the bottom edge of the canvas, the
//! way the charts are laid out; [`from_bottom`] converts them to the
//! top-left pixel space used by render frames.

/// Reference canvas width that font sizes are expressed against.
pub const FONT_REFERENCE_WIDTH: f64 = 650.0;

/// Title font size as a fraction of canvas height.
pub const TITLE_FONT_H: f64 = 0.05;

#[must_use]
pub fn from_bottom(height: f64, fraction: f64) -> f64 {
    height - fraction * height
}

/// Font size that grows with canvas width relative to [`FONT_REFERENCE_WIDTH`].
#[must_use]
pub fn width_scaled_font(width: f64, base_size: f64) -> f64 {
    base_size * (width / FONT_REFERENCE_WIDTH)
}

pub mod xy {
    pub const PLOT_LEFT_W: f64 = 0.10;
    pub const PLOT_RIGHT_W: f64 = 0.90;
    pub const PLOT_BOTTOM_H: f64 = 0.20;
    pub const PLOT_TOP_H: f64 = 0.80;

    pub const TITLE_H: f64 = 0.90;
    pub const X_LABEL_H: f64 = 0.075;
    pub const Y_LABEL_W: f64 = 0.035;
    pub const AXIS_LABEL_FONT: f64 = 11.0;

    pub const TICK_FONT: f64 = 8.0;
    pub const X_TICK_LABEL_H: f64 = 0.16;
    pub const Y_TICK_LABEL_W: f64 = 0.091;
    /// Y tick labels sit slightly below their gridline.
    pub const Y_TICK_LABEL_DROP_H: f64 = 0.009;
    /// Tick marks as fractions of the plot area: 0%, 25%, 50%, 75%, 100%.
    pub const TICK_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

    pub const AXIS_LINE_WIDTH: f64 = 1.0;
    pub const GRID_LINE_WIDTH: f64 = 1.0;
    pub const SERIES_LINE_WIDTH: f64 = 2.0;
    pub const SCATTER_DOT_WIDTH: f64 = 3.0;
}

pub mod number {
    pub const TITLE_H: f64 = 0.90;
    pub const LABEL_H: f64 = 0.20;
    pub const VALUE_H: f64 = 0.50;
    pub const LABEL_FONT: f64 = 25.0;
    pub const VALUE_FONT: f64 = 140.0;
}

pub mod gauge_linear {
    pub const TITLE_H: f64 = 0.95;
    pub const LABEL_H: f64 = 0.05;
    pub const LABEL_FONT: f64 = 25.0;

    pub const BAR_BASE_H: f64 = 0.10;
    pub const BAR_TOP_H: f64 = 0.90;
    pub const BAR_CENTER_W: f64 = 0.50;
    pub const BAR_WIDTH_W: f64 = 0.20;

    pub const LIMIT_LABEL_W: f64 = 0.70;
    pub const LIMIT_LINE_LEFT_W: f64 = 0.375;
    pub const LIMIT_LINE_RIGHT_W: f64 = 0.625;
    pub const LIMIT_LINE_WIDTH: f64 = 1.0;
}

pub mod gauge_angular {
    pub const TITLE_H: f64 = 0.90;
    pub const LABEL_H: f64 = 0.10;
    pub const LABEL_FONT: f64 = 25.0;

    pub const ARC_CENTER_W: f64 = 0.50;
    pub const ARC_CENTER_H: f64 = 0.25;
    pub const ARC_RADIUS_W: f64 = 0.35;
    pub const ARC_WIDTH_W: f64 = 0.10;
    /// Full deflection of the needle arc, in degrees.
    pub const SWEEP_DEGREES: f64 = 180.0;

    pub const LIMIT_H: f64 = 0.25;
    pub const MIN_LABEL_W: f64 = 0.225;
    pub const MAX_LABEL_W: f64 = 0.77;
    pub const MIN_LINE_LEFT_W: f64 = 0.08;
    pub const MIN_LINE_RIGHT_W: f64 = 0.22;
    pub const MAX_LINE_LEFT_W: f64 = 0.78;
    pub const MAX_LINE_RIGHT_W: f64 = 0.92;
    pub const LIMIT_LINE_WIDTH: f64 = 1.0;
}

pub mod pie {
    /// Radius is `min(width, height) / RADIUS_DIVISOR`.
    pub const RADIUS_DIVISOR: f64 = 2.5;
    pub const LABEL_DISTANCE_PX: f64 = 20.0;
    pub const LABEL_FONT_PX: f64 = 12.0;
    /// Title font is `min(width, height) / TITLE_FONT_DIVISOR`.
    pub const TITLE_FONT_DIVISOR: f64 = 20.0;
    pub const TITLE_H: f64 = 0.95;
}

pub mod column {
    pub const GAP_W: f64 = 0.05;
    pub const BASELINE_H: f64 = 0.10;
    pub const TOP_MARGIN_H: f64 = 0.10;
    pub const MIN_HEIGHT_PX: f64 = 2.0;

    pub const TICK_LABEL_X_PX: f64 = 5.0;
    pub const GRID_LEFT_PX: f64 = 30.0;
    pub const GRID_LINE_WIDTH: f64 = 2.0;

    pub const LABEL_FONT_PX: f64 = 12.0;
    pub const LABEL_ROTATION_DEGREES: f64 = -60.0;
    pub const LABEL_DROP_W: f64 = 0.03;
    pub const LABEL_OFFSET_PX: f64 = 20.0;

    /// Title font is `min(width, height) / TITLE_FONT_DIVISOR`.
    pub const TITLE_FONT_DIVISOR: f64 = 20.0;
    pub const TITLE_H: f64 = 0.95;
}

pub mod unknown {
    pub const MESSAGE: &str = "Unknown chart type";
    pub const MESSAGE_H: f64 = 0.50;
}
