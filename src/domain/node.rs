//! Wire-shape sitemap nodes as produced by the generation collaborator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categorical tag attached to every sitemap node.
///
/// Advisory only: layout and rendering never branch on it, but it participates
/// in legacy (name, kind) node lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Page,
    Category,
    Feature,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Page => "page",
            NodeKind::Category => "category",
            NodeKind::Feature => "feature",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "page" => Ok(NodeKind::Page),
            "category" => Ok(NodeKind::Category),
            "feature" => Ok(NodeKind::Feature),
            other => Err(format!(
                "unknown node kind: {} (expected page, category or feature)",
                other
            )),
        }
    }
}

/// Recursive sitemap node matching the generation schema:
/// `{ "name": "...", "type": "page", "children": [...] }`.
///
/// A missing or empty `children` array denotes a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteNode {
    /// Display label, mutable via rename operations
    pub name: String,
    /// Categorical tag (wire field `type`)
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Ordered children, owned exclusively by this node
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SiteNode>,
}

impl SiteNode {
    pub fn leaf(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, kind: NodeKind, children: Vec<SiteNode>) -> Self {
        Self {
            name: name.into(),
            kind,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Lookup target for legacy identity-based edits.
///
/// Identity is the (name, kind) pair at lookup time, not a stable id; with
/// duplicate labels only the first pre-order match is affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub name: String,
    pub kind: NodeKind,
}

impl NodeRef {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_payload_without_children_when_deserializing_then_node_is_leaf() {
        let node: SiteNode = serde_json::from_str(r#"{"name":"About","type":"page"}"#).unwrap();
        assert!(node.is_leaf());
        assert_eq!(node.kind, NodeKind::Page);
    }

    #[test]
    fn given_unknown_kind_when_parsing_then_reports_expected_values() {
        let err = "widget".parse::<NodeKind>().unwrap_err();
        assert!(err.contains("page, category or feature"));
    }
}
