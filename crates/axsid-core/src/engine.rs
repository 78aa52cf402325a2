//! Semantic engine: capture, then project or query.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use axsid_protocols::{
    CaptureScope, CapturedTree, DEFAULT_MAX_NODES, DEFAULT_QUERY_MAX, EngineError, NodeField,
    QueryRequest, QueryResponse, SnapshotRequest, SnapshotResponse, TreeProvider,
};

use crate::projector::{DEFAULT_SAFETY_MULTIPLE, DEFAULT_SNIPPET_MAX_CHARS, TreeProjector};
use crate::query::{QueryEngine, QueryOptions};

/// Engine-wide defaults applied when a request leaves a value unset.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    pub default_max_nodes: usize,
    pub default_query_max: usize,
    pub safety_multiple: usize,
    pub snippet_max_chars: usize,
    /// Fields returned when a snapshot request selects none.
    pub default_fields: Vec<NodeField>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_max_nodes: DEFAULT_MAX_NODES,
            default_query_max: DEFAULT_QUERY_MAX,
            safety_multiple: DEFAULT_SAFETY_MULTIPLE,
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
            default_fields: NodeField::ALL.to_vec(),
        }
    }
}

/// Entry point for snapshots and queries over a [`TreeProvider`].
///
/// Every call captures a fresh tree; nothing is cached between calls.
pub struct SemanticEngine {
    provider: Arc<dyn TreeProvider>,
    options: EngineOptions,
    projector: TreeProjector,
    queries: QueryEngine,
}

impl SemanticEngine {
    pub fn new(provider: Arc<dyn TreeProvider>) -> Self {
        Self::with_options(provider, EngineOptions::default())
    }

    pub fn with_options(provider: Arc<dyn TreeProvider>, options: EngineOptions) -> Self {
        let projector = TreeProjector::new()
            .with_safety_multiple(options.safety_multiple)
            .with_snippet_max_chars(options.snippet_max_chars);
        Self {
            provider,
            options,
            projector,
            queries: QueryEngine::new(),
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Capture the tree and return one page of projected nodes.
    pub async fn snapshot(&self, request: &SnapshotRequest) -> Result<SnapshotResponse, EngineError> {
        let max_nodes = request.max_nodes.unwrap_or(self.options.default_max_nodes);
        if max_nodes == 0 {
            return Err(EngineError::InvalidArgument(
                "max_nodes must be at least 1".to_string(),
            ));
        }
        let fields = self.resolve_fields(request.fields.as_deref());

        let snapshot_id = format!("snap_{}", Uuid::new_v4().simple());
        let tree = self.capture(request.scope, &snapshot_id).await?;

        let projection = self.projector.project(
            &tree,
            request.within_sid.as_deref(),
            &fields,
            max_nodes,
            request.cursor.as_deref(),
        );

        info!(
            snapshot_id = %snapshot_id,
            frame_id = %tree.frame_id,
            nodes = projection.nodes.len(),
            materialized = projection.materialized,
            has_more = projection.next_cursor.is_some(),
            "Snapshot complete"
        );

        Ok(SnapshotResponse {
            snapshot_id,
            nodes: projection.nodes,
            next_cursor: projection.next_cursor,
        })
    }

    /// Capture the whole document and return ranked matches.
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, EngineError> {
        let max = request.max.unwrap_or(self.options.default_query_max);
        if max == 0 {
            return Err(EngineError::InvalidArgument("max must be at least 1".to_string()));
        }

        let query_id = format!("query_{}", Uuid::new_v4().simple());
        let tree = self.capture(CaptureScope::Document, &query_id).await?;

        let outcome = self.queries.run(
            &tree,
            &request.predicates,
            request.within_sid.as_deref(),
            QueryOptions {
                rank_by: request.rank_by,
                multiple: request.multiple,
                max,
                explain: request.explain,
            },
        );

        info!(
            query_id = %query_id,
            rank_by = request.rank_by.as_str(),
            visited = outcome.visited,
            total_matches = outcome.total_matches,
            returned = outcome.matches.len(),
            "Query complete"
        );

        Ok(QueryResponse {
            query_id,
            sids: outcome.matches.iter().map(|m| m.sid.clone()).collect(),
            elements: outcome.matches,
            explanations: outcome.explanations,
            total_matches: outcome.total_matches,
        })
    }

    async fn capture(&self, scope: CaptureScope, call_id: &str) -> Result<CapturedTree, EngineError> {
        match self.provider.capture_tree(scope).await {
            Ok(Some(tree)) => {
                debug!(call_id, scope = scope.as_str(), frame_id = %tree.frame_id, "Tree captured");
                Ok(tree)
            }
            Ok(None) => {
                warn!("Tree capture returned nothing for {}", call_id);
                Err(EngineError::TreeCaptureFailed("no tree available".to_string()))
            }
            Err(e) => {
                warn!("Tree capture failed for {}: {}", call_id, e);
                Err(e.into())
            }
        }
    }

    /// Map requested field names to fields. Unknown names are ignored; an
    /// absent, empty or entirely unknown list selects the default fields.
    fn resolve_fields(&self, requested: Option<&[String]>) -> Vec<NodeField> {
        let mut fields: Vec<NodeField> = Vec::new();
        for name in requested.unwrap_or_default() {
            match NodeField::parse(name) {
                Some(field) if !fields.contains(&field) => fields.push(field),
                Some(_) => {}
                None => debug!("Ignoring unknown snapshot field: {}", name),
            }
        }
        if fields.is_empty() {
            self.options.default_fields.clone()
        } else {
            fields
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
