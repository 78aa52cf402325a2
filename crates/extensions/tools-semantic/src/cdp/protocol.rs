//! `Accessibility` domain types as returned by `Accessibility.getFullAXTree`.

use serde::Deserialize;
use serde_json::Value;

use super::CdpTreeError;

/// AX node from Accessibility domain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AXNode {
    pub node_id: String,
    #[serde(default)]
    pub ignored: bool,
    pub role: Option<AXValue>,
    pub name: Option<AXValue>,
    pub description: Option<AXValue>,
    pub value: Option<AXValue>,
    pub properties: Option<Vec<AXProperty>>,
    pub child_ids: Option<Vec<String>>,
    #[serde(rename = "backendDOMNodeId")]
    pub backend_dom_node_id: Option<i64>,
    pub frame_id: Option<String>,
}

/// AX value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AXValue {
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: Option<Value>,
}

impl AXValue {
    /// Whether the value points at other nodes rather than holding data.
    pub fn is_node_reference(&self) -> bool {
        matches!(self.value_type.as_str(), "idref" | "idrefList" | "nodeList" | "node")
    }

    /// The value as text. `None` for null, missing and node references.
    pub fn as_text(&self) -> Option<String> {
        if self.is_node_reference() {
            return None;
        }
        match self.value.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }
}

/// AX property.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AXProperty {
    pub name: String,
    pub value: AXValue,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FullAxTreePayload {
    Result { nodes: Vec<AXNode> },
    Nodes(Vec<AXNode>),
}

/// Parse a `getFullAXTree` result, either `{"nodes": [...]}` or the bare
/// node array.
pub fn parse_full_ax_tree(json: &str) -> Result<Vec<AXNode>, CdpTreeError> {
    let payload: FullAxTreePayload = serde_json::from_str(json)?;
    Ok(match payload {
        FullAxTreePayload::Result { nodes } => nodes,
        FullAxTreePayload::Nodes(nodes) => nodes,
    })
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
