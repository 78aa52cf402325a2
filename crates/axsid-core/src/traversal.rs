//! Depth-first pre-order walk shared by the projector and the query engine.

use std::ops::ControlFlow;

use axsid_protocols::{AccessibilityNode, CapturedTree};

use crate::identity::{self, AxPath, Sid};

/// A node reached by the walk that lies inside the requested scope.
pub(crate) struct Visit<'a> {
    pub node: &'a AccessibilityNode,
    pub sid: Sid,
    pub frame_id: &'a str,
}

struct Pending<'a> {
    node: &'a AccessibilityNode,
    path: AxPath,
    frame_id: &'a str,
    in_scope: bool,
}

/// Frame override carried by `node`, if any.
fn frame_override(node: &AccessibilityNode) -> Option<&str> {
    node.frame_id.as_deref().filter(|f| !f.is_empty())
}

/// Walk `tree` in pre-order, deriving each node's SID, and call `visit`
/// for every node in scope.
///
/// Without `within_sid` every node is in scope. With it, scope starts at a
/// node whose SID equals `within_sid` and covers exactly that node's
/// subtree. Out-of-scope nodes are still walked so descendant paths and
/// SIDs are the same as in an unscoped walk.
///
/// Returns the number of nodes walked.
pub(crate) fn walk<'a, F>(tree: &'a CapturedTree, within_sid: Option<&str>, mut visit: F) -> usize
where
    F: FnMut(Visit<'a>) -> ControlFlow<()>,
{
    let root = &tree.root;
    let mut stack = vec![Pending {
        node: root,
        path: AxPath::root().child(root.role(), 0),
        frame_id: frame_override(root).unwrap_or(&tree.frame_id),
        in_scope: within_sid.is_none(),
    }];
    let mut walked = 0;

    while let Some(pending) = stack.pop() {
        walked += 1;
        let node = pending.node;
        let sid = identity::derive_from_joined(
            pending.frame_id,
            pending.path.as_str(),
            node.role(),
            node.label(),
            node.description(),
        );
        let in_scope = pending.in_scope || within_sid.is_some_and(|scope| sid == *scope);

        // Reverse push keeps document order on pop.
        for (index, child) in node.children.iter().enumerate().rev() {
            stack.push(Pending {
                node: child,
                path: pending.path.child(child.role(), index),
                frame_id: frame_override(child).unwrap_or(pending.frame_id),
                in_scope,
            });
        }

        if in_scope {
            let flow = visit(Visit {
                node,
                sid,
                frame_id: pending.frame_id,
            });
            if flow.is_break() {
                break;
            }
        }
    }

    walked
}
