#![forbid(unsafe_code)]

//! Arena-backed forest of employee nodes.
//!
//! Nodes live in one `Vec` in input-record order and reference each other by
//! [`NodeIdx`]. The arena is immutable once [`build_hierarchy`] returns:
//! interaction state (expansion, search, viewport) lives elsewhere and only
//! reads it.
//!
//! [`build_hierarchy`]: crate::builder::build_hierarchy

use orgchart_core::record::{EmployeeId, EmployeeRecord, RecordFlags};
use std::collections::HashMap;

/// Index of a node in the forest arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(pub usize);

/// One employee in the reconstructed hierarchy.
///
/// Wraps the input record plus child links in input order. A node is either
/// on the root list or the child of exactly one parent.
#[derive(Debug, Clone)]
pub struct TreeNode {
    record: EmployeeRecord,
    children: Vec<NodeIdx>,
    parent: Option<NodeIdx>,
    flags: RecordFlags,
}

impl TreeNode {
    /// The wrapped input record.
    #[must_use]
    pub fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    /// The employee id.
    #[must_use]
    pub fn id(&self) -> &EmployeeId {
        &self.record.employee_id
    }

    /// The display name.
    #[must_use]
    pub fn legal_name(&self) -> &str {
        &self.record.legal_name
    }

    /// Direct reports, in input-record order.
    #[must_use]
    pub fn children(&self) -> &[NodeIdx] {
        &self.children
    }

    /// Number of direct reports.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True if the node has no direct reports (never expandable).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The manager node, if resolution succeeded.
    #[must_use]
    pub fn parent(&self) -> Option<NodeIdx> {
        self.parent
    }

    /// Data-quality conditions observed for this record.
    #[must_use]
    pub fn flags(&self) -> RecordFlags {
        self.flags
    }
}

/// The reconstructed hierarchy: every input record as a node, plus the
/// ordered root list.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeIdx>,
    by_id: HashMap<EmployeeId, NodeIdx>,
}

impl Forest {
    pub(crate) fn from_parts(
        nodes: Vec<TreeNode>,
        roots: Vec<NodeIdx>,
        by_id: HashMap<EmployeeId, NodeIdx>,
    ) -> Self {
        Self {
            nodes,
            roots,
            by_id,
        }
    }

    /// Total node count (equals the input record count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when built from an empty record set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes, in input-record order.
    #[must_use]
    pub fn roots(&self) -> &[NodeIdx] {
        &self.roots
    }

    /// The node at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` did not come from this forest.
    #[must_use]
    pub fn node(&self, idx: NodeIdx) -> &TreeNode {
        &self.nodes[idx.0]
    }

    /// The node at the given index, if in range.
    #[must_use]
    pub fn get(&self, idx: NodeIdx) -> Option<&TreeNode> {
        self.nodes.get(idx.0)
    }

    /// Look a node up by employee id.
    ///
    /// Records with empty ids are not indexed; with duplicate ids the
    /// first-encountered record wins.
    #[must_use]
    pub fn find_by_id(&self, id: &EmployeeId) -> Option<NodeIdx> {
        self.by_id.get(id).copied()
    }

    /// Depth-first pre-order traversal from the root list.
    ///
    /// Visits the first root and its whole subtree before the next root.
    /// Nodes involved in a manager-reference cycle are on no root path and
    /// are not visited.
    #[must_use]
    pub fn iter_preorder(&self) -> PreOrder<'_> {
        let mut stack: Vec<NodeIdx> = self.roots.iter().rev().copied().collect();
        stack.reserve(self.nodes.len().saturating_sub(stack.len()));
        PreOrder {
            forest: self,
            stack,
        }
    }

    /// Root-to-node path via parent links, ending at `idx`.
    ///
    /// Intended for nodes reached through [`iter_preorder`], whose parent
    /// chains always terminate at a root. The walk is capped at the arena
    /// size so malformed chains cannot loop.
    ///
    /// [`iter_preorder`]: Forest::iter_preorder
    #[must_use]
    pub fn path_to(&self, idx: NodeIdx) -> Vec<NodeIdx> {
        let mut path = vec![idx];
        let mut current = idx;
        while let Some(parent) = self.node(current).parent {
            if path.len() > self.nodes.len() {
                break;
            }
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

/// Iterator for [`Forest::iter_preorder`], backed by an explicit stack so
/// traversal depth is independent of call-stack limits.
#[derive(Debug)]
pub struct PreOrder<'a> {
    forest: &'a Forest,
    stack: Vec<NodeIdx>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<NodeIdx> {
        let idx = self.stack.pop()?;
        let node = self.forest.node(idx);
        self.stack.extend(node.children.iter().rev());
        Some(idx)
    }
}

pub(crate) struct NodeSlot {
    pub record: EmployeeRecord,
    pub children: Vec<NodeIdx>,
    pub parent: Option<NodeIdx>,
    pub flags: RecordFlags,
}

impl NodeSlot {
    pub(crate) fn into_node(self) -> TreeNode {
        TreeNode {
            record: self.record,
            children: self.children,
            parent: self.parent,
            flags: self.flags,
        }
    }
}
