use super::*;

#[test]
fn test_missing_fields_read_as_empty() {
    let node = AccessibilityNode::structural();
    assert_eq!(node.role(), "");
    assert_eq!(node.label(), "");
    assert_eq!(node.description(), "");
    assert_eq!(node.value(), "");
}

#[test]
fn test_builder_sets_fields() {
    let node = AccessibilityNode::new("textbox")
        .with_name("Email")
        .with_description("Work address")
        .with_value("a@b.c")
        .with_bounds(Bounds::new(1.0, 2.0, 30.0, 40.0));
    assert_eq!(node.role(), "textbox");
    assert_eq!(node.label(), "Email");
    assert_eq!(node.description(), "Work address");
    assert_eq!(node.value(), "a@b.c");
    assert_eq!(node.bounds.unwrap().width, 30.0);
}

#[test]
fn test_attribute_names_lowercased() {
    let node = AccessibilityNode::new("checkbox").with_attribute("Checked", "true");
    assert!(node.attributes.contains_key("checked"));
    assert_eq!(node.attribute("CHECKED"), Some("true"));
    assert_eq!(node.attribute("disabled"), None);
}

#[test]
fn test_attribute_lookup_tolerates_mixed_case_input() {
    let json = serde_json::json!({
        "role": "button",
        "attributes": {"Disabled": "false"}
    });
    let node: AccessibilityNode = serde_json::from_value(json).unwrap();
    assert_eq!(node.attribute("disabled"), Some("false"));
}

#[test]
fn test_deserialize_nested_tree() {
    let json = serde_json::json!({
        "role": "WebArea",
        "name": "Checkout",
        "children": [
            {"role": "button", "name": "Submit"},
            {"children": [{"role": "link", "name": "Help", "frameId": "F2"}]}
        ]
    });
    let node: AccessibilityNode = serde_json::from_value(json).unwrap();
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[1].role(), "");
    assert_eq!(node.children[1].children[0].frame_id.as_deref(), Some("F2"));
    assert_eq!(node.subtree_size(), 4);
}

#[test]
fn test_deserialize_null_fields() {
    let json = serde_json::json!({"role": null, "name": null, "value": "x"});
    let node: AccessibilityNode = serde_json::from_value(json).unwrap();
    assert_eq!(node.role(), "");
    assert_eq!(node.value(), "x");
}

#[test]
fn test_serialize_skips_empty_fields() {
    let node = AccessibilityNode::new("button");
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json, serde_json::json!({"role": "button"}));
}

#[test]
fn test_capture_scope_parse() {
    assert_eq!("viewport".parse::<CaptureScope>().unwrap(), CaptureScope::Viewport);
    assert_eq!(" Document ".parse::<CaptureScope>().unwrap(), CaptureScope::Document);
    assert!("page".parse::<CaptureScope>().is_err());
    assert_eq!(CaptureScope::default(), CaptureScope::Document);
}

#[test]
fn test_capture_scope_serde() {
    let json = serde_json::to_string(&CaptureScope::Viewport).unwrap();
    assert_eq!(json, "\"viewport\"");
}

#[test]
fn test_deserialize_rejects_unknown_keys() {
    let json = serde_json::json!({"role": "button", "nmae": "Go"});
    assert!(serde_json::from_value::<AccessibilityNode>(json).is_err());

    let nested = serde_json::json!({"role": "WebArea", "children": [{"nodeId": "1"}]});
    assert!(serde_json::from_value::<AccessibilityNode>(nested).is_err());
}
