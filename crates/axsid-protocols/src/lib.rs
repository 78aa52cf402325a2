//! # axsid Protocols
//!
//! Data model and protocol definitions (traits) shared by the axsid crates.
//! Contains only interface definitions - no traversal or scoring logic.
//!
//! ## Core Traits
//!
//! - [`TreeProvider`] - Source of captured accessibility trees
//! - [`Tool`] - Agent-facing tool implementations
//!
//! ## Data Model
//!
//! - [`AccessibilityNode`] - One node of a captured accessibility tree
//! - [`ProjectedNode`] / [`SnapshotResponse`] - Snapshot output
//! - [`QueryMatch`] / [`QueryResponse`] - Query output

pub mod error;
pub mod tool;
pub mod tree;
pub mod types;

pub use error::{EngineError, ProviderError, ToolError};
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use tree::{AccessibilityNode, Bounds, CaptureScope, CapturedTree, TreeProvider};
pub use types::*;
