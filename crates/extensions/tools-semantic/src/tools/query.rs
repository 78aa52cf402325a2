//! `semantic_query`: rank nodes against role, label, text and attribute
//! predicates.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use axsid_core::SemanticEngine;
use axsid_protocols::{QueryRequest, Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use super::parse_params;

/// Query tool.
pub struct QueryTool {
    definition: ToolDefinition,
    engine: Arc<SemanticEngine>,
}

impl QueryTool {
    pub fn new(engine: Arc<SemanticEngine>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "semantic_query",
                "Semantic Query",
                "Find accessibility nodes by role, label, text or attributes and return \
                 their SIDs ranked by match score",
            )
            .with_parameters_schema(serde_json::json!({
                "type": "object",
                "properties": {
                    "role": {
                        "type": "string",
                        "description": "Case-insensitive substring of the node role"
                    },
                    "label": {
                        "type": "string",
                        "description": "Case-insensitive substring of the accessible name (falls back to description)"
                    },
                    "text": {
                        "type": "string",
                        "description": "Case-insensitive substring of name, description or value"
                    },
                    "attributes": {
                        "type": "object",
                        "additionalProperties": {"type": "string"},
                        "description": "Exact (case-insensitive) attribute values, e.g. {\"disabled\": \"false\"}"
                    },
                    "within_sid": {
                        "type": "string",
                        "description": "Only search the subtree rooted at this SID"
                    },
                    "rank_by": {
                        "type": "string",
                        "enum": ["semantic_score", "proximity", "visibility"],
                        "description": "Result ordering (default: semantic_score)"
                    },
                    "multiple": {
                        "type": "boolean",
                        "description": "Return up to max matches instead of only the best"
                    },
                    "max": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Maximum matches when multiple is set (default: 10)"
                    },
                    "explain": {
                        "type": "boolean",
                        "description": "Include the predicates each match satisfied"
                    }
                }
            })),
            engine,
        }
    }
}

#[async_trait]
impl Tool for QueryTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let request: QueryRequest = parse_params(params)?;
        debug!(
            session_id = %ctx.session_id,
            correlation_id = %ctx.correlation_id,
            "semantic_query"
        );

        let response = self.engine.query(&request).await?;
        let summary = match response.elements.first() {
            Some(best) => format!(
                "{} of {} matches, best {} ({} \"{}\", confidence {:.2})",
                response.elements.len(),
                response.total_matches,
                best.sid,
                best.role,
                best.label,
                best.confidence
            ),
            None => "No matches".to_string(),
        };
        let output = serde_json::to_value(&response)
            .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
        Ok(ToolResult::success_json(summary, output))
    }
}
