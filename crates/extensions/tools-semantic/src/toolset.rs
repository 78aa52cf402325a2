//! The semantic tools as one registered set.

use std::sync::Arc;

use axsid_core::SemanticEngine;
use axsid_protocols::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::tools::{QueryTool, SnapshotTool};

/// Tools sharing one engine, looked up by id.
pub struct SemanticToolset {
    tools: Vec<Arc<dyn Tool>>,
}

impl SemanticToolset {
    pub fn new(engine: Arc<SemanticEngine>) -> Self {
        Self {
            tools: vec![
                Arc::new(SnapshotTool::new(engine.clone())),
                Arc::new(QueryTool::new(engine)),
            ],
        }
    }

    /// Get a tool by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|t| t.definition().id == id)
            .cloned()
    }

    /// List all tool definitions.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition().clone()).collect()
    }

    /// Validate and run the tool `id`.
    pub async fn execute(
        &self,
        id: &str,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .get(id)
            .ok_or_else(|| ToolError::NotFound(id.to_string()))?;
        tool.validate(&params)?;
        tool.execute(params, ctx).await
    }
}
