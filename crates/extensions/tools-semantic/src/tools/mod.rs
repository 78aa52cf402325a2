//! Agent-facing semantic tools.

mod query;
mod snapshot;

pub use query::*;
pub use snapshot::*;

use axsid_protocols::ToolError;

/// Parse tool parameters, treating `null` as an empty object.
pub(crate) fn parse_params<T>(params: serde_json::Value) -> Result<T, ToolError>
where
    T: serde::de::DeserializeOwned,
{
    let params = if params.is_null() {
        serde_json::json!({})
    } else {
        params
    };
    serde_json::from_value(params)
        .map_err(|e| ToolError::InvalidParameters(format!("Invalid params: {}", e)))
}
