//! Accessibility tree model and the provider boundary.

mod node;
mod provider;

pub use node::{AccessibilityNode, Bounds};
pub use provider::{CaptureScope, CapturedTree, TreeProvider};

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
