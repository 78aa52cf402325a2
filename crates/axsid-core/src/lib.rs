//! # axsid Core
//!
//! Semantic identification and query over captured accessibility trees.
//!
//! ## Components
//!
//! - [`identity`] - Deterministic SIDs derived from tree position and content
//! - [`TreeProjector`] - Flat, paginated, field-selected snapshots
//! - [`QueryEngine`] - Additive predicate scoring and ranking
//! - [`SemanticEngine`] - Captures a tree from a provider and runs either of the above
//!
//! Trees are captured fresh on every call. SIDs are stable across calls
//! as long as the frame, the node's position and its role, label and
//! description do not change.

pub mod cursor;
pub mod engine;
pub mod identity;
pub mod projector;
pub mod query;
mod traversal;

pub use engine::{EngineOptions, SemanticEngine};
pub use identity::{AxPath, Sid};
pub use projector::{Projection, TreeProjector};
pub use query::{NodeScore, PreparedPredicates, QueryEngine, QueryOptions, QueryOutcome};
