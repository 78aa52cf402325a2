//! CDP accessibility-tree conversion errors.

use thiserror::Error;

use axsid_protocols::ProviderError;

#[derive(Debug, Error)]
pub enum CdpTreeError {
    /// The node list was empty.
    #[error("Accessibility tree has no nodes")]
    Empty,

    /// Every node is referenced as a child of another node.
    #[error("Accessibility tree has no root node")]
    NoRoot,

    /// The payload is not a `getFullAXTree` result.
    #[error("Invalid accessibility tree payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<CdpTreeError> for ProviderError {
    fn from(e: CdpTreeError) -> Self {
        ProviderError::InvalidTree(e.to_string())
    }
}
