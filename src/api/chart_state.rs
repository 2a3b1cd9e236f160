use serde::{Deserialize, Serialize};

use crate::core::{DataWindow, SeriesStore};
use crate::render::DEFAULT_FONT_FAMILY;

use super::{ChartConfig, ColorRole, HostStyle, ResolvedTheme};

/// Aggregate state a chart renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub(crate) config: ChartConfig,
    pub(crate) value: f64,
    pub(crate) series: SeriesStore,
}

impl ChartState {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        let mut series = SeriesStore::new();
        series.set_max_points(config.max_points);
        Self {
            config,
            value: 0.0,
            series,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn series(&self) -> &SeriesStore {
        &self.series
    }

    #[must_use]
    pub fn data_window(&self) -> DataWindow {
        DataWindow::new(
            self.config.x_min,
            self.config.x_max,
            self.config.y_min,
            self.config.y_max,
        )
    }

    /// Fills unset colors and font from `host` and keeps them.
    ///
    /// Later passes reuse the stored values, so the host is consulted at
    /// most once per slot until [`ChartState::reset_theme`] clears them.
    pub fn resolve_theme(&mut self, host: &HostStyle) -> ResolvedTheme {
        for role in ColorRole::ALL {
            if self.config.theme.get(role).is_none() {
                self.config.theme.set(role, Some(host.color_for(role)));
            }
        }
        if self.config.font_family.is_none() {
            self.config.font_family = Some(
                host.font_family
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_owned()),
            );
        }

        let theme = &self.config.theme;
        ResolvedTheme {
            text: theme.text.unwrap_or_else(|| host.color_for(ColorRole::Text)),
            line: theme.line.unwrap_or_else(|| host.color_for(ColorRole::Line)),
            grid: theme.grid.unwrap_or_else(|| host.color_for(ColorRole::Grid)),
            axis: theme.axis.unwrap_or_else(|| host.color_for(ColorRole::Axis)),
            font_family: self
                .config
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_owned()),
        }
    }

    /// Forgets every color and the font so the next pass re-reads the host.
    pub fn reset_theme(&mut self) {
        for role in ColorRole::ALL {
            self.config.theme.set(role, None);
        }
        self.config.font_family = None;
    }
}
