use serde::{Deserialize, Serialize};

use crate::render::{Color, DEFAULT_FONT_FAMILY};

use super::ColorRole;

/// Grid lines are the foreground color at this opacity.
pub const GRID_ALPHA: f64 = 0.1;

/// Colors and font the host's active visual style provides.
///
/// Unset chart colors are derived from it: text and axis take the
/// foreground, the series line takes the accent, and the grid takes the
/// foreground at [`GRID_ALPHA`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostStyle {
    pub foreground: Color,
    pub accent: Color,
    pub font_family: Option<String>,
}

impl Default for HostStyle {
    fn default() -> Self {
        Self {
            foreground: Color::from_rgb8(0x2e, 0x34, 0x36),
            accent: Color::from_rgb8(0x35, 0x84, 0xe4),
            font_family: None,
        }
    }
}

impl HostStyle {
    #[must_use]
    pub fn color_for(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Text | ColorRole::Axis => self.foreground,
            ColorRole::Line => self.accent,
            ColorRole::Grid => self.foreground.with_alpha(GRID_ALPHA),
        }
    }

    /// Extracts the family from a toolkit font setting such as `"Cantarell 11"`.
    ///
    /// Everything before the first token that starts with a digit is the
    /// family name.
    #[must_use]
    pub fn font_family_from_setting(setting: &str) -> String {
        let family: Vec<&str> = setting
            .trim_matches('"')
            .split_whitespace()
            .take_while(|token| !token.starts_with(|c: char| c.is_ascii_digit()))
            .collect();
        if family.is_empty() {
            DEFAULT_FONT_FAMILY.to_owned()
        } else {
            family.join(" ")
        }
    }
}

/// Fully resolved colors and font for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub text: Color,
    pub line: Color,
    pub grid: Color,
    pub axis: Color,
    pub font_family: String,
}
