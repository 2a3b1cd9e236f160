use serde::{Deserialize, Serialize};

use crate::core::{Column, DataPoint, Slice};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub config: ChartConfig,
    pub value: f64,
    pub points: Vec<DataPoint>,
    pub slices: Vec<Slice>,
    pub columns: Vec<Column>,
    pub column_max_value: f64,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}
