#![forbid(unsafe_code)]

//! Name search over the forest.
//!
//! Case-insensitive substring match on `legal_name`, depth-first pre-order:
//! the first root and its whole subtree are scanned before the next root,
//! and the first hit in that order wins. A miss is an ordinary outcome
//! surfaced to the caller, never an error.

use orgchart_hierarchy::{Forest, NodeIdx};

/// Outcome of a search-and-reveal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First node whose name contains the query, now revealed.
    Match(NodeIdx),
    /// No node matched; the embedding layer decides presentation.
    NoMatch,
    /// The query was empty; nothing was searched.
    EmptyQuery,
}

impl SearchOutcome {
    /// The matched node, if any.
    #[must_use]
    pub fn matched(&self) -> Option<NodeIdx> {
        match self {
            Self::Match(idx) => Some(*idx),
            Self::NoMatch | Self::EmptyQuery => None,
        }
    }
}

/// Find the first node (pre-order) whose legal name contains `query`,
/// ignoring case. Empty queries match nothing.
#[must_use]
pub fn find_by_name(forest: &Forest, query: &str) -> Option<NodeIdx> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    forest
        .iter_preorder()
        .find(|&idx| forest.node(idx).legal_name().to_lowercase().contains(&needle))
}
