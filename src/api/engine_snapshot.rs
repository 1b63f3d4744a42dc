use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{IndexRange, SelectionRange};
use crate::render::Renderer;

use super::BarChartEngine;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub detail_viewport: Viewport,
    pub overview_viewport: Viewport,
    pub selection: Option<SelectionRange>,
    pub indices: Option<IndexRange>,
    pub hover_index: Option<usize>,
    pub selected_index: Option<usize>,
    pub points: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct EngineSnapshotJsonContractV1 {
    schema_version: u32,
    snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> BarChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            detail_viewport: self.detail_viewport,
            overview_viewport: self.overview_viewport,
            selection: self.brush.selection(),
            indices: self.brush.indices(),
            hover_index: self.hover_index,
            selected_index: self.selected_index,
            points: self.data.clone(),
        }
    }
}
