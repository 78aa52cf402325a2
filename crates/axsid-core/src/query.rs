//! Query scoring and ranking.
//!
//! Every in-scope node is scored against the predicates; contributions add
//! up, so a node can match partially:
//!
//! | predicate | condition | score |
//! |---|---|---|
//! | role | substring of node role | +50 |
//! | label | substring of node label | +40 |
//! | label | substring of node description (label missed) | +30 |
//! | text | substring of label, description and value | +35 |
//! | attribute | exact value match, per attribute | +20 |
//!
//! All comparisons ignore case.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use axsid_protocols::{AccessibilityNode, CapturedTree, QueryMatch, QueryPredicates, RankBy};

use crate::traversal;

pub const ROLE_WEIGHT: u32 = 50;
pub const LABEL_WEIGHT: u32 = 40;
pub const DESCRIPTION_WEIGHT: u32 = 30;
pub const TEXT_WEIGHT: u32 = 35;
pub const ATTRIBUTE_WEIGHT: u32 = 20;

/// Predicates lower-cased once per query. Blank predicates are dropped.
#[derive(Debug, Clone, Default)]
pub struct PreparedPredicates {
    role: Option<Needle>,
    label: Option<Needle>,
    text: Option<Needle>,
    attributes: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
struct Needle {
    original: String,
    lowered: String,
}

impl Needle {
    fn new(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self {
            original: raw.to_string(),
            lowered: raw.to_lowercase(),
        })
    }

    fn found_in(&self, haystack: &str) -> bool {
        !haystack.is_empty() && haystack.to_lowercase().contains(&self.lowered)
    }
}

impl PreparedPredicates {
    pub fn new(predicates: &QueryPredicates) -> Self {
        Self {
            role: Needle::new(predicates.role.as_deref()),
            label: Needle::new(predicates.label.as_deref()),
            text: Needle::new(predicates.text.as_deref()),
            attributes: predicates
                .attributes
                .iter()
                .map(|(name, value)| (name.to_lowercase(), value.clone()))
                .collect(),
        }
    }

    /// Whether no predicate is set; such a query matches nothing.
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.label.is_none() && self.text.is_none() && self.attributes.is_empty()
    }
}

/// Score of one node and the predicates that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeScore {
    pub score: u32,
    pub reasons: Vec<String>,
}

impl NodeScore {
    fn add(&mut self, weight: u32, reason: String) {
        self.score += weight;
        self.reasons.push(reason);
    }

    /// Reasons joined for display, e.g. `role=button,label≈Submit`.
    pub fn explanation(&self) -> String {
        self.reasons.join(",")
    }
}

/// Score `node` against `predicates`.
pub fn score_node(node: &AccessibilityNode, predicates: &PreparedPredicates) -> NodeScore {
    let mut score = NodeScore::default();

    if let Some(role) = &predicates.role {
        if role.found_in(node.role()) {
            score.add(ROLE_WEIGHT, format!("role={}", node.role()));
        }
    }

    if let Some(label) = &predicates.label {
        if label.found_in(node.label()) {
            score.add(LABEL_WEIGHT, format!("label≈{}", label.original));
        } else if label.found_in(node.description()) {
            score.add(DESCRIPTION_WEIGHT, format!("description≈{}", label.original));
        }
    }

    if let Some(text) = &predicates.text {
        // Space separated: a needle spanning two fields must include the space.
        let combined = format!("{} {} {}", node.label(), node.description(), node.value());
        if text.found_in(&combined) {
            score.add(TEXT_WEIGHT, format!("text≈{}", text.original));
        }
    }

    for (name, expected) in &predicates.attributes {
        if let Some(actual) = node.attribute(name) {
            if actual.to_lowercase() == expected.to_lowercase() {
                score.add(ATTRIBUTE_WEIGHT, format!("{}={}", name, actual));
            }
        }
    }

    score
}

/// `min(score / 100, 1)` rounded to two decimals.
pub fn confidence(score: u32) -> f64 {
    let raw = (f64::from(score) / 100.0).min(1.0);
    (raw * 100.0).round() / 100.0
}

fn is_identifiable(node: &AccessibilityNode) -> bool {
    [node.role(), node.label(), node.description()]
        .iter()
        .any(|s| !s.trim().is_empty())
}

/// Shaping applied after scoring.
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    pub rank_by: RankBy,
    /// Return up to `max` matches instead of only the best one.
    pub multiple: bool,
    pub max: usize,
    pub explain: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            rank_by: RankBy::SemanticScore,
            multiple: false,
            max: axsid_protocols::DEFAULT_QUERY_MAX,
            explain: false,
        }
    }
}

/// Ranked query output.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub matches: Vec<QueryMatch>,
    /// One entry per match, aligned by index, when explanations were asked for.
    pub explanations: Option<Vec<String>>,
    /// Matches found before shaping.
    pub total_matches: usize,
    /// Nodes walked.
    pub visited: usize,
}

struct Scored {
    matched: QueryMatch,
    explanation: String,
}

/// Scores and ranks captured trees.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine;

impl QueryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run a query over `tree`.
    pub fn run(
        &self,
        tree: &CapturedTree,
        predicates: &QueryPredicates,
        within_sid: Option<&str>,
        options: QueryOptions,
    ) -> QueryOutcome {
        let prepared = PreparedPredicates::new(predicates);
        let mut scored = Vec::new();

        let visited = traversal::walk(tree, within_sid, |visit| {
            if prepared.is_empty() || !is_identifiable(visit.node) {
                return ControlFlow::Continue(());
            }
            let node_score = score_node(visit.node, &prepared);
            if node_score.score > 0 {
                scored.push(Scored {
                    matched: QueryMatch {
                        sid: visit.sid.into_string(),
                        role: visit.node.role().to_string(),
                        label: visit.node.label().to_string(),
                        score: node_score.score,
                        confidence: confidence(node_score.score),
                    },
                    explanation: node_score.explanation(),
                });
            }
            ControlFlow::Continue(())
        });

        rank(&mut scored, options.rank_by);

        let total_matches = scored.len();
        let limit = if options.multiple { options.max.max(1) } else { 1 };
        scored.truncate(limit);

        let explanations = options
            .explain
            .then(|| scored.iter().map(|s| s.explanation.clone()).collect());

        QueryOutcome {
            matches: scored.into_iter().map(|s| s.matched).collect(),
            explanations,
            total_matches,
            visited,
        }
    }
}

/// Stable sort, so ties keep traversal order.
fn rank(scored: &mut [Scored], rank_by: RankBy) {
    match rank_by {
        RankBy::SemanticScore => scored.sort_by(|a, b| b.matched.score.cmp(&a.matched.score)),
        RankBy::Proximity => scored.sort_by(|a, b| a.matched.sid.cmp(&b.matched.sid)),
        RankBy::Visibility => scored.sort_by(|a, b| {
            b.matched
                .confidence
                .partial_cmp(&a.matched.confidence)
                .unwrap_or(Ordering::Equal)
        }),
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
