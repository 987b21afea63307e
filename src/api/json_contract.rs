use serde::{Deserialize, Serialize};

use crate::core::Plot;
use crate::error::{TrellisError, TrellisResult};

pub const PLOT_SET_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSetJsonContractV1 {
    pub schema_version: u32,
    pub plots: Vec<Plot>,
}

pub fn plots_to_json_contract_v1_pretty(plots: &[Plot]) -> TrellisResult<String> {
    let payload = PlotSetJsonContractV1 {
        schema_version: PLOT_SET_JSON_SCHEMA_V1,
        plots: plots.to_vec(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        TrellisError::InvalidData(format!("failed to serialize plot set contract v1: {e}"))
    })
}

/// Accepts either a bare plot array or a versioned contract envelope.
pub fn plots_from_json_compat_str(input: &str) -> TrellisResult<Vec<Plot>> {
    if let Ok(plots) = serde_json::from_str::<Vec<Plot>>(input) {
        return Ok(plots);
    }
    let payload: PlotSetJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        TrellisError::InvalidData(format!("failed to parse plot set json payload: {e}"))
    })?;
    if payload.schema_version != PLOT_SET_JSON_SCHEMA_V1 {
        return Err(TrellisError::InvalidData(format!(
            "unsupported plot set schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.plots)
}
