use super::*;

use std::sync::Mutex;

use async_trait::async_trait;
use axsid_protocols::{AccessibilityNode, ProviderError, QueryPredicates, RankBy};

/// Serves a fixed tree and records the scopes it was asked for.
struct MockProvider {
    tree: Option<CapturedTree>,
    scopes: Mutex<Vec<CaptureScope>>,
}

impl MockProvider {
    fn new(tree: CapturedTree) -> Self {
        Self {
            tree: Some(tree),
            scopes: Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self {
            tree: None,
            scopes: Mutex::new(Vec::new()),
        }
    }

    fn scopes(&self) -> Vec<CaptureScope> {
        self.scopes.lock().unwrap().clone()
    }
}

#[async_trait]
impl TreeProvider for MockProvider {
    async fn capture_tree(
        &self,
        scope: CaptureScope,
    ) -> Result<Option<CapturedTree>, ProviderError> {
        self.scopes.lock().unwrap().push(scope);
        Ok(self.tree.clone())
    }
}

struct FailingProvider;

#[async_trait]
impl TreeProvider for FailingProvider {
    async fn capture_tree(
        &self,
        _scope: CaptureScope,
    ) -> Result<Option<CapturedTree>, ProviderError> {
        Err(ProviderError::Unavailable("browser detached".to_string()))
    }
}

fn login_page() -> CapturedTree {
    CapturedTree::new(
        "main",
        AccessibilityNode::new("WebArea").with_name("Login").with_children([
            AccessibilityNode::new("textbox").with_name("Username"),
            AccessibilityNode::new("textbox")
                .with_name("Password")
                .with_attribute("required", "true"),
            AccessibilityNode::new("button").with_name("Submit"),
            AccessibilityNode::new("link").with_name("Forgot password?"),
        ]),
    )
}

fn engine(tree: CapturedTree) -> (Arc<MockProvider>, SemanticEngine) {
    let provider = Arc::new(MockProvider::new(tree));
    let engine = SemanticEngine::new(provider.clone());
    (provider, engine)
}

#[tokio::test]
async fn test_snapshot_defaults() {
    let (provider, engine) = engine(login_page());
    let response = engine
        .snapshot(&SnapshotRequest::default())
        .await
        .unwrap();

    assert!(response.snapshot_id.starts_with("snap_"));
    assert_eq!(response.nodes.len(), 5);
    assert!(response.next_cursor.is_none());
    let first = &response.nodes[0];
    assert!(first.sid.as_deref().unwrap().starts_with("sid_"));
    assert_eq!(first.role.as_deref(), Some("WebArea"));
    assert_eq!(first.frame_id.as_deref(), Some("main"));
    assert_eq!(provider.scopes(), vec![CaptureScope::Document]);
}

#[tokio::test]
async fn test_snapshot_forwards_scope() {
    let (provider, engine) = engine(login_page());
    engine
        .snapshot(&SnapshotRequest::new(CaptureScope::Viewport))
        .await
        .unwrap();
    assert_eq!(provider.scopes(), vec![CaptureScope::Viewport]);
}

#[tokio::test]
async fn test_snapshot_ids_are_unique() {
    let (_, engine) = engine(login_page());
    let a = engine.snapshot(&SnapshotRequest::default()).await.unwrap();
    let b = engine.snapshot(&SnapshotRequest::default()).await.unwrap();
    assert_ne!(a.snapshot_id, b.snapshot_id);
    assert_eq!(a.nodes, b.nodes);
}

#[tokio::test]
async fn test_snapshot_pages() {
    let (_, engine) = engine(login_page());
    let first = engine
        .snapshot(&SnapshotRequest::default().max_nodes(2))
        .await
        .unwrap();
    assert_eq!(first.nodes.len(), 2);
    assert_eq!(first.next_cursor.as_deref(), Some("2"));

    let second = engine
        .snapshot(&SnapshotRequest::default().max_nodes(2).cursor("2"))
        .await
        .unwrap();
    assert_eq!(second.nodes[0].label.as_deref(), Some("Password"));
    assert_eq!(second.next_cursor.as_deref(), Some("4"));

    let third = engine
        .snapshot(&SnapshotRequest::default().max_nodes(2).cursor("4"))
        .await
        .unwrap();
    assert_eq!(third.nodes.len(), 1);
    assert!(third.next_cursor.is_none());
}

#[tokio::test]
async fn test_snapshot_rejects_zero_max_nodes() {
    let (provider, engine) = engine(login_page());
    let err = engine
        .snapshot(&SnapshotRequest::default().max_nodes(0))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "invalid_argument");
    assert!(provider.scopes().is_empty());
}

#[tokio::test]
async fn test_snapshot_field_selection() {
    let (_, engine) = engine(login_page());
    let response = engine
        .snapshot(&SnapshotRequest::default().fields(["sid", "label", "nonsense"]))
        .await
        .unwrap();
    for node in &response.nodes {
        assert!(node.sid.is_some());
        assert!(node.label.is_some());
        assert!(node.role.is_none());
        assert!(node.frame_id.is_none());
    }
}

#[tokio::test]
async fn test_snapshot_unknown_fields_fall_back_to_defaults() {
    let (_, engine) = engine(login_page());
    let response = engine
        .snapshot(&SnapshotRequest::default().fields(["nonsense"]))
        .await
        .unwrap();
    assert!(response.nodes[0].role.is_some());
    assert!(response.nodes[0].frame_id.is_some());

    let empty: [&str; 0] = [];
    let response = engine
        .snapshot(&SnapshotRequest::default().fields(empty))
        .await
        .unwrap();
    assert!(response.nodes[0].sid.is_some());
}

#[tokio::test]
async fn test_configured_default_fields() {
    let provider = Arc::new(MockProvider::new(login_page()));
    let options = EngineOptions {
        default_fields: vec![NodeField::Sid],
        ..EngineOptions::default()
    };
    let engine = SemanticEngine::with_options(provider, options);
    let response = engine.snapshot(&SnapshotRequest::default()).await.unwrap();
    assert!(response.nodes[0].sid.is_some());
    assert!(response.nodes[0].role.is_none());
}

#[tokio::test]
async fn test_configured_default_max_nodes() {
    let provider = Arc::new(MockProvider::new(login_page()));
    let options = EngineOptions {
        default_max_nodes: 3,
        ..EngineOptions::default()
    };
    let engine = SemanticEngine::with_options(provider, options);
    let response = engine.snapshot(&SnapshotRequest::default()).await.unwrap();
    assert_eq!(response.nodes.len(), 3);
    assert_eq!(response.next_cursor.as_deref(), Some("3"));
}

#[tokio::test]
async fn test_snapshot_capture_failures() {
    let engine = SemanticEngine::new(Arc::new(MockProvider::empty()));
    let err = engine.snapshot(&SnapshotRequest::default()).await.unwrap_err();
    assert_eq!(err.code(), "tree_capture_failed");

    let engine = SemanticEngine::new(Arc::new(FailingProvider));
    let err = engine.snapshot(&SnapshotRequest::default()).await.unwrap_err();
    assert_eq!(err.code(), "tree_capture_failed");
    assert!(err.to_string().contains("browser detached"));
}

#[tokio::test]
async fn test_query_role_and_label() {
    let (provider, engine) = engine(login_page());
    let request = QueryRequest::new(QueryPredicates::default().role("button").label("Submit"));
    let response = engine.query(&request).await.unwrap();

    assert!(response.query_id.starts_with("query_"));
    assert_eq!(response.elements.len(), 1);
    assert_eq!(response.sids, vec![response.elements[0].sid.clone()]);
    assert_eq!(response.elements[0].score, 90);
    assert_eq!(response.elements[0].confidence, 0.9);
    assert!(response.explanations.is_none());
    assert_eq!(provider.scopes(), vec![CaptureScope::Document]);
}

#[tokio::test]
async fn test_query_sid_matches_snapshot_sid() {
    let (_, engine) = engine(login_page());
    let snapshot = engine.snapshot(&SnapshotRequest::default()).await.unwrap();
    let submit_sid = snapshot
        .nodes
        .iter()
        .find(|n| n.label.as_deref() == Some("Submit"))
        .and_then(|n| n.sid.clone())
        .unwrap();

    let response = engine
        .query(&QueryRequest::new(QueryPredicates::default().label("Submit")))
        .await
        .unwrap();
    assert_eq!(response.sids, vec![submit_sid]);
}

#[tokio::test]
async fn test_query_multiple_with_explain() {
    let (_, engine) = engine(login_page());
    let request = QueryRequest::new(QueryPredicates::default().role("textbox"))
        .multiple(5)
        .explain();
    let response = engine.query(&request).await.unwrap();

    assert_eq!(response.elements.len(), 2);
    assert_eq!(response.total_matches, 2);
    assert_eq!(
        response.explanations,
        Some(vec!["role=textbox".to_string(), "role=textbox".to_string()])
    );
}

#[tokio::test]
async fn test_query_single_reports_total() {
    let (_, engine) = engine(login_page());
    let request = QueryRequest::new(QueryPredicates::default().text("password"));
    let response = engine.query(&request).await.unwrap();
    assert_eq!(response.elements.len(), 1);
    assert_eq!(response.total_matches, 2);
}

#[tokio::test]
async fn test_query_no_matches() {
    let (_, engine) = engine(login_page());
    let request = QueryRequest::new(QueryPredicates::default().role("nonexistent-role-xyz"));
    let response = engine.query(&request).await.unwrap();
    assert!(response.sids.is_empty());
    assert!(response.elements.is_empty());
    assert_eq!(response.total_matches, 0);
}

#[tokio::test]
async fn test_query_within_scope() {
    let tree = CapturedTree::new(
        "main",
        AccessibilityNode::new("WebArea").with_children([
            AccessibilityNode::new("dialog")
                .with_name("Confirm")
                .with_child(AccessibilityNode::new("button").with_name("OK")),
            AccessibilityNode::new("button").with_name("OK"),
        ]),
    );
    let (_, engine) = engine(tree);
    let dialog = engine
        .query(&QueryRequest::new(QueryPredicates::default().role("dialog")))
        .await
        .unwrap();

    let request = QueryRequest::new(QueryPredicates::default().role("button"))
        .within(dialog.sids[0].clone())
        .multiple(10);
    let scoped = engine.query(&request).await.unwrap();
    assert_eq!(scoped.total_matches, 1);

    let everywhere = engine
        .query(&QueryRequest::new(QueryPredicates::default().role("button")).multiple(10))
        .await
        .unwrap();
    assert_eq!(everywhere.total_matches, 2);
    assert!(everywhere.sids.contains(&scoped.sids[0]));
}

#[tokio::test]
async fn test_query_rank_by_proximity() {
    let (_, engine) = engine(login_page());
    let request = QueryRequest::new(QueryPredicates::default().text("o"))
        .rank_by(RankBy::Proximity)
        .multiple(10);
    let response = engine.query(&request).await.unwrap();
    let mut sorted = response.sids.clone();
    sorted.sort();
    assert_eq!(response.sids, sorted);
}

#[tokio::test]
async fn test_query_rejects_zero_max() {
    let (provider, engine) = engine(login_page());
    let request = QueryRequest::new(QueryPredicates::default().role("button")).multiple(0);
    let err = engine.query(&request).await.unwrap_err();
    assert_eq!(err.code(), "invalid_argument");
    assert!(provider.scopes().is_empty());
}

#[tokio::test]
async fn test_query_capture_failure() {
    let engine = SemanticEngine::new(Arc::new(MockProvider::empty()));
    let request = QueryRequest::new(QueryPredicates::default().role("button"));
    let err = engine.query(&request).await.unwrap_err();
    assert!(matches!(err, EngineError::TreeCaptureFailed(_)));
}
