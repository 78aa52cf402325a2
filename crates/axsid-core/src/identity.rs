//! SID derivation: positional AX paths hashed with node content.
//!
//! A SID is `sid_` followed by the first 24 characters of the URL-safe
//! base64 encoding of
//! `SHA-256(frame_id || "||" || ax_path || "||" || role || "||" || normalized_label || "||" || description)`.
//!
//! Paths are role-qualified and index-qualified, so a SID survives
//! re-renders that keep the same structure but changes when siblings are
//! reordered or roles change.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Prefix carried by every SID.
pub const SID_PREFIX: &str = "sid_";

/// Number of encoded hash characters kept after the prefix.
pub const SID_TOKEN_LEN: usize = 24;

const FIELD_SEPARATOR: &[u8] = b"||";
const PATH_SEPARATOR: char = '/';

/// Semantic identifier of a node within one page context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sid(String);

impl Sid {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Sid> for String {
    fn from(sid: Sid) -> Self {
        sid.0
    }
}

impl PartialEq<str> for Sid {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Role-qualified, index-qualified ancestor chain of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxPath {
    joined: String,
    depth: usize,
}

impl AxPath {
    /// The empty path above the root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from pre-formatted segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = Self::root();
        for segment in segments {
            path.push_segment(segment.as_ref());
        }
        path
    }

    /// Path of the `index`-th child (with the given role) of this path's node.
    pub fn child(&self, role: &str, index: usize) -> Self {
        let mut path = self.clone();
        path.push_segment(&segment(role, index));
        path
    }

    fn push_segment(&mut self, segment: &str) {
        if self.depth > 0 {
            self.joined.push(PATH_SEPARATOR);
        }
        self.joined.push_str(segment);
        self.depth += 1;
    }

    /// The joined form hashed into the SID.
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl fmt::Display for AxPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined)
    }
}

/// Format one path step as `<role>[<childIndex>]`.
pub fn segment(role: &str, index: usize) -> String {
    format!("{}[{}]", role, index)
}

/// Lower-case, trim and collapse internal whitespace runs to one space.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the SID for a node. Pure and total; empty inputs are valid.
pub fn derive(frame_id: &str, path: &AxPath, role: &str, label: &str, description: &str) -> Sid {
    derive_from_joined(frame_id, path.as_str(), role, label, description)
}

pub(crate) fn derive_from_joined(
    frame_id: &str,
    ax_path: &str,
    role: &str,
    label: &str,
    description: &str,
) -> Sid {
    let normalized = normalize_label(label);

    let mut hasher = Sha256::new();
    hasher.update(frame_id.as_bytes());
    hasher.update(FIELD_SEPARATOR);
    hasher.update(ax_path.as_bytes());
    hasher.update(FIELD_SEPARATOR);
    hasher.update(role.as_bytes());
    hasher.update(FIELD_SEPARATOR);
    hasher.update(normalized.as_bytes());
    hasher.update(FIELD_SEPARATOR);
    hasher.update(description.as_bytes());
    let digest = hasher.finalize();

    // 32 digest bytes encode to 43 characters.
    let encoded = URL_SAFE_NO_PAD.encode(digest);
    Sid(format!("{}{}", SID_PREFIX, &encoded[..SID_TOKEN_LEN]))
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
