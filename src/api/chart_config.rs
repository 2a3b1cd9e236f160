use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ChartType, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Themeable color slots of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorRole {
    Text,
    Line,
    Grid,
    Axis,
}

impl ColorRole {
    pub const ALL: [Self; 4] = [Self::Text, Self::Line, Self::Grid, Self::Axis];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text_color",
            Self::Line => "line_color",
            Self::Grid => "grid_color",
            Self::Axis => "axis_color",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts both `text` and `text_color` style names.
impl FromStr for ColorRole {
    type Err = ChartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        let name = name.strip_suffix("_color").unwrap_or(name);
        match name {
            "text" => Ok(Self::Text),
            "line" => Ok(Self::Line),
            "grid" => Ok(Self::Grid),
            "axis" => Ok(Self::Axis),
            other => Err(ChartError::InvalidArgument(format!(
                "unknown color role `{other}`"
            ))),
        }
    }
}

/// Per-role colors set explicitly by the caller.
///
/// `None` means "take it from the host style on the next render".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub text: Option<Color>,
    pub line: Option<Color>,
    pub grid: Option<Color>,
    pub axis: Option<Color>,
}

impl ThemeColors {
    #[must_use]
    pub fn get(&self, role: ColorRole) -> Option<Color> {
        match role {
            ColorRole::Text => self.text,
            ColorRole::Line => self.line,
            ColorRole::Grid => self.grid,
            ColorRole::Axis => self.axis,
        }
    }

    pub fn set(&mut self, role: ColorRole, color: Option<Color>) {
        let slot = match role {
            ColorRole::Text => &mut self.text,
            ColorRole::Line => &mut self.line,
            ColorRole::Grid => &mut self.grid,
            ColorRole::Axis => &mut self.axis,
        };
        *slot = color;
    }
}

/// Everything about a chart except its data series and live value.
///
/// This type is serializable so hosts can keep chart setup in a file
/// (`ChartConfig::from_json_str`) instead of replaying setter calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub chart_type: ChartType,
    pub title: Option<String>,
    pub label: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub value_min: f64,
    pub value_max: f64,
    /// Preferred canvas width reported to hosts that size the widget.
    pub width_hint: u32,
    pub column_ticks: u32,
    pub font_family: Option<String>,
    pub theme: ThemeColors,
    pub max_points: Option<usize>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(500, 250),
            chart_type: ChartType::Unknown,
            title: None,
            label: None,
            x_label: None,
            y_label: None,
            x_min: 0.0,
            x_max: 100.0,
            y_min: 0.0,
            y_max: 100.0,
            value_min: 0.0,
            value_max: 100.0,
            width_hint: 500,
            column_ticks: 4,
            font_family: None,
            theme: ThemeColors::default(),
            max_points: None,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport, chart_type: ChartType) -> Self {
        Self {
            viewport,
            chart_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_value_range(mut self, value_min: f64, value_max: f64) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, role: ColorRole, color: Color) -> Self {
        self.theme.set(role, Some(color));
        self
    }

    #[must_use]
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = Some(max_points);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (name, value) in [
            ("x_min", self.x_min),
            ("x_max", self.x_max),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
            ("value_min", self.value_min),
            ("value_max", self.value_max),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!("{name} must be finite")));
            }
        }
        for role in ColorRole::ALL {
            if let Some(color) = self.theme.get(role) {
                color.validate()?;
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}
