//! Chrome DevTools Protocol accessibility trees.

mod convert;
mod error;
mod protocol;

pub use convert::CdpTreeConverter;
pub use error::CdpTreeError;
pub use protocol::{AXNode, AXProperty, AXValue, parse_full_ax_tree};
