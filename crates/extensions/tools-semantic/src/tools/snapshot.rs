//! `semantic_snapshot`: one page of identified nodes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use axsid_core::SemanticEngine;
use axsid_protocols::{SnapshotRequest, Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use super::parse_params;

/// Snapshot tool.
pub struct SnapshotTool {
    definition: ToolDefinition,
    engine: Arc<SemanticEngine>,
}

impl SnapshotTool {
    pub fn new(engine: Arc<SemanticEngine>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "semantic_snapshot",
                "Semantic Snapshot",
                "List accessibility nodes of the page with stable semantic ids (SIDs), \
                 paginated with a cursor",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "scope": {
                        "type": "string",
                        "enum": ["viewport", "document"],
                        "description": "Portion of the page to capture (default: document)"
                    },
                    "within_sid": {
                        "type": "string",
                        "description": "Only return the subtree rooted at this SID"
                    },
                    "fields": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "enum": ["sid", "role", "label", "text_snippet", "bounds", "frame_id"]
                        },
                        "description": "Fields to include per node (default: all)"
                    },
                    "max_nodes": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Page size (default: 5000)"
                    },
                    "cursor": {
                        "type": "string",
                        "description": "next_cursor from the previous page"
                    }
                }
            })),
            engine,
        }
    }
}

#[async_trait]
impl Tool for SnapshotTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let request: SnapshotRequest = parse_params(params)?;
        debug!(
            session_id = %ctx.session_id,
            correlation_id = %ctx.correlation_id,
            "semantic_snapshot"
        );

        let response = self.engine.snapshot(&request).await?;
        let summary = match &response.next_cursor {
            Some(cursor) => format!(
                "{} nodes (more available, cursor {})",
                response.nodes.len(),
                cursor
            ),
            None => format!("{} nodes", response.nodes.len()),
        };
        let output = serde_json::to_value(&response)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        Ok(ToolResult::success_json(summary, output))
    }
}
