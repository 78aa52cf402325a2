//! Tree projection: flatten a captured tree into identified, paginated nodes.

use std::ops::ControlFlow;

use tracing::debug;

use axsid_protocols::{AccessibilityNode, CapturedTree, NodeField, ProjectedNode};

use crate::cursor::{PageWindow, parse_cursor};
use crate::traversal::{self, Visit};

/// Default factor applied to the page size to bound traversal.
pub const DEFAULT_SAFETY_MULTIPLE: usize = 10;

/// Default maximum length of a text snippet, in characters.
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 50;

const ELLIPSIS: char = '…';

/// One page of projected nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub nodes: Vec<ProjectedNode>,
    pub next_cursor: Option<String>,
    /// Content-bearing in-scope nodes counted before the walk ended.
    pub materialized: usize,
    /// Whether the safety valve cut the walk short.
    pub truncated: bool,
}

/// Projects captured trees into flat node pages.
#[derive(Debug, Clone)]
pub struct TreeProjector {
    safety_multiple: usize,
    snippet_max_chars: usize,
}

impl Default for TreeProjector {
    fn default() -> Self {
        Self {
            safety_multiple: DEFAULT_SAFETY_MULTIPLE,
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
        }
    }
}

impl TreeProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the traversal bound as a multiple of the page size (minimum 1).
    pub fn with_safety_multiple(mut self, multiple: usize) -> Self {
        self.safety_multiple = multiple.max(1);
        self
    }

    /// Set the maximum snippet length in characters (minimum 1).
    pub fn with_snippet_max_chars(mut self, max_chars: usize) -> Self {
        self.snippet_max_chars = max_chars.max(1);
        self
    }

    /// Project one page of `tree`.
    ///
    /// Nodes are taken in pre-order; nodes without role, label and text
    /// snippet are skipped but their children are still visited. The page
    /// is `[cursor, cursor + max_nodes)` of the resulting sequence.
    pub fn project(
        &self,
        tree: &CapturedTree,
        within_sid: Option<&str>,
        fields: &[NodeField],
        max_nodes: usize,
        cursor: Option<&str>,
    ) -> Projection {
        let max_nodes = max_nodes.max(1);
        let window = PageWindow::new(parse_cursor(cursor), max_nodes);
        // Always beyond the page end, so a cut-short walk still knows a
        // next page exists.
        let valve = window
            .start
            .saturating_add(max_nodes.saturating_mul(self.safety_multiple));

        let mut nodes = Vec::new();
        let mut materialized = 0usize;
        let mut truncated = false;

        let walked = traversal::walk(tree, within_sid, |visit| {
            let snippet = text_snippet(visit.node, self.snippet_max_chars);
            if !has_content(visit.node, snippet.as_deref()) {
                return ControlFlow::Continue(());
            }
            if window.contains(materialized) {
                nodes.push(self.materialize(&visit, snippet, fields));
            }
            materialized += 1;
            if materialized > valve {
                truncated = true;
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });

        if truncated {
            debug!(walked, materialized, valve, "Projection stopped at safety valve");
        }

        Projection {
            next_cursor: window.next_cursor(materialized),
            nodes,
            materialized,
            truncated,
        }
    }

    fn materialize(
        &self,
        visit: &Visit<'_>,
        snippet: Option<String>,
        fields: &[NodeField],
    ) -> ProjectedNode {
        let node = visit.node;
        let mut projected = ProjectedNode::default();
        for field in fields {
            match field {
                NodeField::Sid => projected.sid = Some(visit.sid.to_string()),
                NodeField::Role => projected.role = non_empty(node.role()),
                NodeField::Label => projected.label = non_empty(node.label()),
                NodeField::TextSnippet => projected.text_snippet = snippet.clone(),
                NodeField::Bounds => projected.bounds = node.bounds,
                NodeField::FrameId => projected.frame_id = Some(visit.frame_id.to_string()),
            }
        }
        projected
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}

fn has_content(node: &AccessibilityNode, snippet: Option<&str>) -> bool {
    !node.role().trim().is_empty() || !node.label().trim().is_empty() || snippet.is_some()
}

/// Text shown for a node: its value, else its description, with whitespace
/// collapsed and cut to `max_chars` characters (the last one an ellipsis).
pub fn text_snippet(node: &AccessibilityNode, max_chars: usize) -> Option<String> {
    let source = [node.value(), node.description()]
        .into_iter()
        .find(|s| !s.trim().is_empty())?;
    let collapsed = source.split_whitespace().collect::<Vec<_>>().join(" ");
    Some(truncate_chars(&collapsed, max_chars))
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
