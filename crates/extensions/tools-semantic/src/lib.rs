//! Semantic tools for axsid.
//!
//! Exposes snapshot and query over accessibility trees as agent tools,
//! plus the tree sources they run against.
//!
//! ## Tools
//!
//! - `semantic_snapshot` - Flat, paginated list of nodes with their SIDs
//! - `semantic_query` - Ranked SIDs for role/label/text/attribute predicates
//!
//! ## Tree Sources
//!
//! - [`StaticTreeProvider`] - In-memory tree
//! - [`JsonTreeProvider`] - Tree file (nested JSON or CDP `getFullAXTree` output) re-read per call
//! - [`cdp::CdpTreeConverter`] - Flat CDP AX node list to nested tree

pub mod cdp;
mod provider;
mod tools;
mod toolset;

pub use provider::{JsonTreeProvider, StaticTreeProvider, TreeFileFormat};
pub use tools::*;
pub use toolset::SemanticToolset;
