use super::*;

#[test]
fn test_node_field_parse_variants() {
    assert_eq!(NodeField::parse("sid"), Some(NodeField::Sid));
    assert_eq!(NodeField::parse("textSnippet"), Some(NodeField::TextSnippet));
    assert_eq!(NodeField::parse("text_snippet"), Some(NodeField::TextSnippet));
    assert_eq!(NodeField::parse("text"), Some(NodeField::TextSnippet));
    assert_eq!(NodeField::parse("frameId"), Some(NodeField::FrameId));
    assert_eq!(NodeField::parse(" Bounds "), Some(NodeField::Bounds));
    assert_eq!(NodeField::parse("color"), None);
}

#[test]
fn test_node_field_round_trip_names() {
    for field in NodeField::ALL {
        assert_eq!(NodeField::parse(field.as_str()), Some(field));
    }
}

#[test]
fn test_snapshot_request_defaults() {
    let req: SnapshotRequest = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(req.scope, crate::tree::CaptureScope::Document);
    assert!(req.within_sid.is_none());
    assert!(req.fields.is_none());
    assert!(req.max_nodes.is_none());
    assert!(req.cursor.is_none());
}

#[test]
fn test_snapshot_request_camel_case_aliases() {
    let req: SnapshotRequest = serde_json::from_value(serde_json::json!({
        "scope": "viewport",
        "withinSid": "sid_abc",
        "maxNodes": 3,
        "cursor": "6"
    }))
    .unwrap();
    assert_eq!(req.within_sid.as_deref(), Some("sid_abc"));
    assert_eq!(req.max_nodes, Some(3));
    assert_eq!(req.cursor.as_deref(), Some("6"));
}

#[test]
fn test_snapshot_response_serializes_null_cursor() {
    let resp = SnapshotResponse {
        snapshot_id: "s".to_string(),
        nodes: vec![],
        next_cursor: None,
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert!(json["next_cursor"].is_null());
    assert!(json.as_object().unwrap().contains_key("next_cursor"));
}

#[test]
fn test_projected_node_omits_unselected_fields() {
    let node = ProjectedNode {
        sid: Some("sid_x".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json, serde_json::json!({"sid": "sid_x"}));
}

#[test]
fn test_query_request_flattened_predicates() {
    let req: QueryRequest = serde_json::from_value(serde_json::json!({
        "role": "button",
        "label": "Submit",
        "attributes": {"disabled": "false"},
        "rankBy": "proximity",
        "multiple": true,
        "max": 3,
        "explain": true
    }))
    .unwrap();
    assert_eq!(req.predicates.role.as_deref(), Some("button"));
    assert_eq!(req.predicates.label.as_deref(), Some("Submit"));
    assert_eq!(req.predicates.attributes["disabled"], "false");
    assert_eq!(req.rank_by, RankBy::Proximity);
    assert!(req.multiple);
    assert_eq!(req.max, Some(3));
    assert!(req.explain);
}

#[test]
fn test_query_request_defaults() {
    let req: QueryRequest = serde_json::from_value(serde_json::json!({"text": "hi"})).unwrap();
    assert_eq!(req.rank_by, RankBy::SemanticScore);
    assert!(!req.multiple);
    assert!(!req.explain);
    assert!(req.max.is_none());
}

#[test]
fn test_rank_by_parse() {
    assert_eq!("visibility".parse::<RankBy>().unwrap(), RankBy::Visibility);
    assert!("distance".parse::<RankBy>().is_err());
    assert_eq!(RankBy::Proximity.as_str(), "proximity");
}

#[test]
fn test_query_response_skips_missing_explanations() {
    let resp = QueryResponse {
        query_id: "q".to_string(),
        sids: vec![],
        elements: vec![],
        explanations: None,
        total_matches: 0,
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert!(json.get("explanations").is_none());
}
