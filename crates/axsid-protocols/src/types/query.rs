//! Query request/response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default number of matches returned when `multiple` is set.
pub const DEFAULT_QUERY_MAX: usize = 10;

/// Ordering applied to query matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    /// Descending raw score, ties kept in traversal order.
    #[default]
    SemanticScore,
    /// Ascending SID order. Placeholder: no geometry is consulted.
    Proximity,
    /// Descending confidence. Placeholder: no render state is consulted.
    Visibility,
}

impl RankBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SemanticScore => "semantic_score",
            Self::Proximity => "proximity",
            Self::Visibility => "visibility",
        }
    }
}

impl std::str::FromStr for RankBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "semantic_score" => Ok(Self::SemanticScore),
            "proximity" => Ok(Self::Proximity),
            "visibility" => Ok(Self::Visibility),
            other => Err(format!(
                "unknown rank_by '{}' (expected semantic_score, proximity or visibility)",
                other
            )),
        }
    }
}

/// Predicates scored against every visited node. All are optional and
/// contribute additively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPredicates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl QueryPredicates {
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Query request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(flatten)]
    pub predicates: QueryPredicates,

    #[serde(default, alias = "withinSid")]
    pub within_sid: Option<String>,

    #[serde(default, alias = "rankBy")]
    pub rank_by: RankBy,

    /// Return up to `max` matches instead of only the best one.
    #[serde(default)]
    pub multiple: bool,

    /// Upper bound on returned matches; must be at least 1.
    #[serde(default)]
    pub max: Option<usize>,

    /// Attach per-match reasons.
    #[serde(default)]
    pub explain: bool,
}

impl QueryRequest {
    pub fn new(predicates: QueryPredicates) -> Self {
        Self {
            predicates,
            ..Default::default()
        }
    }

    pub fn within(mut self, sid: impl Into<String>) -> Self {
        self.within_sid = Some(sid.into());
        self
    }

    pub fn rank_by(mut self, rank_by: RankBy) -> Self {
        self.rank_by = rank_by;
        self
    }

    pub fn multiple(mut self, max: usize) -> Self {
        self.multiple = true;
        self.max = Some(max);
        self
    }

    pub fn explain(mut self) -> Self {
        self.explain = true;
        self
    }
}

/// A scored query match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    pub sid: String,
    pub role: String,
    pub label: String,
    pub score: u32,
    /// `min(score / 100, 1)` rounded to two decimals. A heuristic, not a
    /// probability.
    pub confidence: f64,
}

/// Query response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Random token correlating this call's log lines.
    pub query_id: String,
    pub sids: Vec<String>,
    pub elements: Vec<QueryMatch>,
    /// One reason string per element, aligned by index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanations: Option<Vec<String>>,
    /// Number of matches before result shaping.
    pub total_matches: usize,
}
