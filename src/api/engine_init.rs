use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartConfig, ChartEngine, ChartState, HostStyle};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine from a validated configuration.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            chart_type = ?config.chart_type,
            width = config.viewport.width,
            height = config.viewport.height,
            "creating chart engine"
        );

        Ok(Self {
            renderer,
            state: ChartState::new(config),
            host_style: HostStyle::default(),
            needs_redraw: true,
            last_frame: None,
            user_data: None,
        })
    }

    /// Same as [`ChartEngine::new`] with an explicit host style.
    pub fn with_host_style(
        renderer: R,
        config: ChartConfig,
        host_style: HostStyle,
    ) -> ChartResult<Self> {
        let mut engine = Self::new(renderer, config)?;
        engine.host_style = host_style;
        Ok(engine)
    }
}
