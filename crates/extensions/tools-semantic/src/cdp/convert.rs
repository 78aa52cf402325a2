//! Flat CDP node list to nested [`AccessibilityNode`] tree.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use axsid_protocols::{AccessibilityNode, Bounds, CapturedTree};

use super::{AXNode, AXValue, CdpTreeError};

/// Builds [`CapturedTree`]s from `Accessibility.getFullAXTree` node lists.
#[derive(Debug, Clone)]
pub struct CdpTreeConverter {
    frame_id: String,
    bounds: HashMap<i64, Bounds>,
}

impl CdpTreeConverter {
    /// `frame_id` is used when the root node does not name its frame.
    pub fn new(frame_id: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            bounds: HashMap::new(),
        }
    }

    /// Attach bounds to nodes by backend DOM node id.
    pub fn with_bounds(mut self, bounds: HashMap<i64, Bounds>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Convert `nodes` into a tree rooted at the first node no other node
    /// lists as a child. Child ids that are unknown or already placed are
    /// skipped, so cycles and shared children cannot recurse.
    pub fn convert(&self, nodes: &[AXNode]) -> Result<CapturedTree, CdpTreeError> {
        if nodes.is_empty() {
            return Err(CdpTreeError::Empty);
        }

        let index: HashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.node_id.as_str(), i))
            .collect();
        let referenced: HashSet<&str> = nodes
            .iter()
            .flat_map(|n| n.child_ids.iter().flatten())
            .map(String::as_str)
            .collect();
        let root = nodes
            .iter()
            .position(|n| !referenced.contains(n.node_id.as_str()))
            .ok_or(CdpTreeError::NoRoot)?;

        // Pre-order over reachable nodes; each node's children are claimed
        // by the first parent that lists them.
        let mut claimed = vec![false; nodes.len()];
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![root];
        claimed[root] = true;

        while let Some(current) = stack.pop() {
            order.push(current);
            for child_id in nodes[current].child_ids.iter().flatten() {
                match index.get(child_id.as_str()) {
                    Some(&child) if !claimed[child] => {
                        claimed[child] = true;
                        children[current].push(child);
                    }
                    Some(_) => debug!("Skipping repeated AX child {}", child_id),
                    None => debug!("Skipping unknown AX child {}", child_id),
                }
            }
            stack.extend(children[current].iter().rev());
        }

        // Children follow their parent in pre-order, so building in reverse
        // finds every child already built.
        let mut built: Vec<Option<AccessibilityNode>> = vec![None; nodes.len()];
        for &i in order.iter().rev() {
            let kids: Vec<_> = children[i].iter().filter_map(|&c| built[c].take()).collect();
            built[i] = Some(self.convert_node(&nodes[i]).with_children(kids));
        }

        let root_node = built[root].take().ok_or(CdpTreeError::NoRoot)?;
        let frame_id = nodes[root]
            .frame_id
            .clone()
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| self.frame_id.clone());

        debug!(
            total = nodes.len(),
            reachable = order.len(),
            built = root_node.subtree_size(),
            frame_id = %frame_id,
            "Converted CDP accessibility tree"
        );
        Ok(CapturedTree::new(frame_id, root_node))
    }

    fn convert_node(&self, ax: &AXNode) -> AccessibilityNode {
        let mut node = if ax.ignored {
            AccessibilityNode::structural()
        } else {
            let mut node = AccessibilityNode::structural();
            node.role = text(&ax.role);
            node.name = text(&ax.name);
            node.description = text(&ax.description);
            node.value = text(&ax.value);
            for property in ax.properties.iter().flatten() {
                if let Some(value) = property.value.as_text() {
                    node = node.with_attribute(&property.name, value);
                }
            }
            node
        };

        if let Some(bounds) = ax.backend_dom_node_id.and_then(|id| self.bounds.get(&id)) {
            node = node.with_bounds(*bounds);
        }
        if let Some(frame_id) = ax.frame_id.as_deref().filter(|f| !f.is_empty()) {
            node = node.with_frame_id(frame_id);
        }
        node
    }
}

fn text(value: &Option<AXValue>) -> Option<String> {
    value
        .as_ref()
        .and_then(AXValue::as_text)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
