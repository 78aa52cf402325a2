//! Error types for the axsid protocol layer.

mod engine;
mod provider;
mod tool;

pub use engine::*;
pub use provider::*;
pub use tool::*;
