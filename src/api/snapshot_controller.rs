use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ChartSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            config: self.state.config.clone(),
            value: self.state.value,
            points: self.points().to_vec(),
            slices: self.slices().to_vec(),
            columns: self.columns().to_vec(),
            column_max_value: self.column_max_value(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
