//! TreeProvider trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AccessibilityNode;
use crate::error::ProviderError;

/// Portion of the page the provider should capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureScope {
    Viewport,
    #[default]
    Document,
}

impl CaptureScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewport => "viewport",
            Self::Document => "document",
        }
    }
}

impl std::str::FromStr for CaptureScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viewport" => Ok(Self::Viewport),
            "document" => Ok(Self::Document),
            other => Err(format!("unknown scope '{}' (expected viewport or document)", other)),
        }
    }
}

/// A tree as captured at call time, together with the frame it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapturedTree {
    /// Identifier of the frame the root belongs to. Hashed into every SID.
    #[serde(alias = "frameId")]
    pub frame_id: String,
    pub root: AccessibilityNode,
}

impl CapturedTree {
    pub fn new(frame_id: impl Into<String>, root: AccessibilityNode) -> Self {
        Self {
            frame_id: frame_id.into(),
            root,
        }
    }
}

/// Source of accessibility trees.
///
/// `Ok(None)` means no tree is available right now; the engine reports it
/// as a capture failure rather than an empty result.
#[async_trait]
pub trait TreeProvider: Send + Sync {
    /// Capture the current tree.
    async fn capture_tree(&self, scope: CaptureScope)
    -> Result<Option<CapturedTree>, ProviderError>;
}
