//! Tree providers backed by memory or by a JSON file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use axsid_protocols::{
    AccessibilityNode, Bounds, CaptureScope, CapturedTree, ProviderError, TreeProvider,
};

use crate::cdp::{CdpTreeConverter, parse_full_ax_tree};

/// Serves the same tree on every capture.
#[derive(Debug, Clone)]
pub struct StaticTreeProvider {
    tree: Option<CapturedTree>,
}

impl StaticTreeProvider {
    pub fn new(tree: CapturedTree) -> Self {
        Self { tree: Some(tree) }
    }

    /// A provider that never has a tree.
    pub fn empty() -> Self {
        Self { tree: None }
    }
}

#[async_trait]
impl TreeProvider for StaticTreeProvider {
    async fn capture_tree(
        &self,
        _scope: CaptureScope,
    ) -> Result<Option<CapturedTree>, ProviderError> {
        Ok(self.tree.clone())
    }
}

/// Encoding of the file read by [`JsonTreeProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeFileFormat {
    /// A nested node, or `{"frame_id": ..., "root": ...}`. Bounds are read
    /// from the nodes themselves.
    #[default]
    Tree,
    /// An `Accessibility.getFullAXTree` result. The AX tree has no geometry,
    /// so bounds come only from a bounds file keyed by backend DOM node id
    /// (see [`JsonTreeProvider::with_bounds_file`]).
    Cdp,
}

/// Reads the tree from a file on every capture, so each call sees the
/// file's current content. A missing file means no tree is available.
#[derive(Debug, Clone)]
pub struct JsonTreeProvider {
    path: PathBuf,
    format: TreeFileFormat,
    frame_id: String,
    bounds_path: Option<PathBuf>,
}

impl JsonTreeProvider {
    /// `frame_id` applies when the file does not name a frame.
    pub fn new(path: impl Into<PathBuf>, format: TreeFileFormat, frame_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format,
            frame_id: frame_id.into(),
            bounds_path: None,
        }
    }

    /// Read node bounds for CDP trees from `path`, a JSON object mapping
    /// backend DOM node ids to `{"x", "y", "width", "height"}`. The file is
    /// re-read on every capture alongside the tree.
    pub fn with_bounds_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.bounds_path = Some(path.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse file content in this provider's format.
    pub fn parse(&self, content: &str) -> Result<CapturedTree, ProviderError> {
        self.parse_with_bounds(content, HashMap::new())
    }

    /// Parse file content, attaching `bounds` to CDP nodes by backend id.
    pub fn parse_with_bounds(
        &self,
        content: &str,
        bounds: HashMap<i64, Bounds>,
    ) -> Result<CapturedTree, ProviderError> {
        match self.format {
            TreeFileFormat::Tree => parse_tree_document(content, &self.frame_id),
            TreeFileFormat::Cdp => {
                let nodes = parse_full_ax_tree(content)?;
                Ok(CdpTreeConverter::new(self.frame_id.clone())
                    .with_bounds(bounds)
                    .convert(&nodes)?)
            }
        }
    }

    async fn read_bounds(&self) -> Result<HashMap<i64, Bounds>, ProviderError> {
        let Some(path) = &self.bounds_path else {
            return Ok(HashMap::new());
        };
        if self.format != TreeFileFormat::Cdp {
            debug!("Ignoring bounds file for nested tree: {}", path.display());
            return Ok(HashMap::new());
        }
        let content = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|e| {
            ProviderError::InvalidTree(format!("bounds file {}: {}", path.display(), e))
        })
    }
}

/// A nested document is either a wrapper with `root` or a bare root node.
/// Anything else is rejected rather than read as an empty tree.
fn parse_tree_document(content: &str, frame_id: &str) -> Result<CapturedTree, ProviderError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let Some(object) = value.as_object() else {
        return Err(ProviderError::InvalidTree(
            "tree document must be a JSON object".to_string(),
        ));
    };
    if object.is_empty() {
        return Err(ProviderError::InvalidTree("tree document is empty".to_string()));
    }

    if object.contains_key("root") {
        return serde_json::from_value::<CapturedTree>(value)
            .map_err(|e| ProviderError::InvalidTree(format!("invalid tree wrapper: {}", e)));
    }
    if object.contains_key("nodes") {
        return Err(ProviderError::InvalidTree(
            "document holds a CDP node list; read it with the cdp format".to_string(),
        ));
    }

    serde_json::from_value::<AccessibilityNode>(value)
        .map(|root| CapturedTree::new(frame_id, root))
        .map_err(|e| ProviderError::InvalidTree(format!("invalid root node: {}", e)))
}

#[async_trait]
impl TreeProvider for JsonTreeProvider {
    async fn capture_tree(
        &self,
        scope: CaptureScope,
    ) -> Result<Option<CapturedTree>, ProviderError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Tree file not found: {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let bounds = self.read_bounds().await?;

        // Files hold whole documents; viewport capture is not narrowed.
        debug!(
            path = %self.path.display(),
            scope = scope.as_str(),
            bytes = content.len(),
            bounds = bounds.len(),
            "Read tree file"
        );
        self.parse_with_bounds(&content, bounds).map(Some)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
