//! Snapshot/query engine errors.

use thiserror::Error;

use super::ProviderError;

/// Errors surfaced by snapshot and query calls.
///
/// A scope SID that matches nothing and a malformed cursor are not errors:
/// the first yields an empty result, the second restarts at offset 0.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The tree provider returned no tree or failed.
    #[error("Tree capture failed: {0}")]
    TreeCaptureFailed(String),

    /// A request argument is outside its documented range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl EngineError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TreeCaptureFailed(_) => "tree_capture_failed",
            Self::InvalidArgument(_) => "invalid_argument",
        }
    }
}

impl From<ProviderError> for EngineError {
    fn from(e: ProviderError) -> Self {
        EngineError::TreeCaptureFailed(e.to_string())
    }
}
