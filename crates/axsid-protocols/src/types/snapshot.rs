//! Snapshot request/response types.

use serde::{Deserialize, Serialize};

use crate::tree::{Bounds, CaptureScope};

/// Default page size for snapshots.
pub const DEFAULT_MAX_NODES: usize = 5000;

/// Fields a caller may select for projected nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeField {
    Sid,
    Role,
    Label,
    TextSnippet,
    Bounds,
    FrameId,
}

impl NodeField {
    pub const ALL: [NodeField; 6] = [
        NodeField::Sid,
        NodeField::Role,
        NodeField::Label,
        NodeField::TextSnippet,
        NodeField::Bounds,
        NodeField::FrameId,
    ];

    /// Parse a field name. Accepts snake_case, camelCase and `text`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "").as_str() {
            "sid" => Some(Self::Sid),
            "role" => Some(Self::Role),
            "label" | "name" => Some(Self::Label),
            "text" | "textsnippet" => Some(Self::TextSnippet),
            "bounds" => Some(Self::Bounds),
            "frameid" | "frame" => Some(Self::FrameId),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sid => "sid",
            Self::Role => "role",
            Self::Label => "label",
            Self::TextSnippet => "text_snippet",
            Self::Bounds => "bounds",
            Self::FrameId => "frame_id",
        }
    }
}

/// A node as returned by a snapshot, restricted to the selected fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_snippet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<String>,
}

/// Snapshot request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRequest {
    #[serde(default)]
    pub scope: CaptureScope,

    /// Restrict output to the subtree rooted at this SID.
    #[serde(default, alias = "withinSid")]
    pub within_sid: Option<String>,

    /// Field names to include; all fields when absent.
    #[serde(default)]
    pub fields: Option<Vec<String>>,

    /// Page size; must be at least 1.
    #[serde(default, alias = "maxNodes")]
    pub max_nodes: Option<usize>,

    /// Opaque cursor returned by a previous page.
    #[serde(default)]
    pub cursor: Option<String>,
}

impl SnapshotRequest {
    pub fn new(scope: CaptureScope) -> Self {
        Self {
            scope,
            ..Default::default()
        }
    }

    pub fn within(mut self, sid: impl Into<String>) -> Self {
        self.within_sid = Some(sid.into());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Snapshot response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    /// Random token correlating this call's log lines.
    pub snapshot_id: String,
    pub nodes: Vec<ProjectedNode>,
    /// Cursor for the next page; `None` when exhausted.
    pub next_cursor: Option<String>,
}
