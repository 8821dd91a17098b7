#![forbid(unsafe_code)]

//! Flattened visible rows — the contract handed to the renderer.
//!
//! The renderer never walks the forest itself: it asks for the flattened
//! pre-order listing of nodes on expanded paths and draws one row (or card)
//! per entry. Everything presentation needs — depth, report count,
//! expansion flag, detail flag, search highlight — rides along on the row.

use crate::chart_state::ChartState;
use orgchart_core::record::EmployeeId;
use orgchart_hierarchy::{Forest, NodeIdx};

/// One renderable node on an expanded path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Arena index for forest lookups.
    pub idx: NodeIdx,
    /// Employee id, cloned for renderer-side keying.
    pub id: EmployeeId,
    /// Nesting depth; roots are 0.
    pub depth: usize,
    /// Number of direct reports (0 means no expand affordance).
    pub child_count: usize,
    /// Whether the node's subtree is shown.
    pub expanded: bool,
    /// Whether the detail panel is open.
    pub detail_open: bool,
    /// Whether this node is the current search hit.
    pub search_match: bool,
}

/// Flatten the forest into visible rows under the given state.
///
/// Roots are always listed; children appear only under expanded parents.
/// Collapsed subtrees are skipped entirely but keep their own expansion
/// flags for when they reappear. Traversal uses an explicit stack, so
/// pathological chart depth cannot overflow the call stack.
#[must_use]
pub fn visible_rows(forest: &Forest, state: &ChartState) -> Vec<VisibleRow> {
    let mut out = Vec::new();
    let mut stack: Vec<(NodeIdx, usize)> =
        forest.roots().iter().rev().map(|&idx| (idx, 0)).collect();

    while let Some((idx, depth)) = stack.pop() {
        let node = forest.node(idx);
        let expanded = state.is_expanded(node.id());
        out.push(VisibleRow {
            idx,
            id: node.id().clone(),
            depth,
            child_count: node.child_count(),
            expanded,
            detail_open: state.is_detail_open(node.id()),
            search_match: state.is_search_match(node.id()),
        });
        if expanded {
            stack.extend(node.children().iter().rev().map(|&c| (c, depth + 1)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_core::record::EmployeeRecord;
    use orgchart_hierarchy::build_hierarchy;

    fn forest() -> Forest {
        build_hierarchy(vec![
            EmployeeRecord::new("ceo", "Alice"),
            EmployeeRecord::new("vp", "Bob").reporting_to("Alice"),
            EmployeeRecord::new("ic", "Carol").reporting_to("Bob"),
            EmployeeRecord::new("ceo2", "Zed"),
        ])
    }

    fn names(forest: &Forest, rows: &[VisibleRow]) -> Vec<String> {
        rows.iter()
            .map(|r| forest.node(r.idx).legal_name().to_string())
            .collect()
    }

    #[test]
    fn collapsed_chart_shows_only_roots() {
        let forest = forest();
        let state = ChartState::new();
        let rows = visible_rows(&forest, &state);
        assert_eq!(names(&forest, &rows), ["Alice", "Zed"]);
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[0].child_count, 1);
        assert!(!rows[0].expanded);
    }

    #[test]
    fn expansion_reveals_children_in_order() {
        let forest = forest();
        let mut state = ChartState::new();
        state.toggle(&forest, forest.roots()[0]);
        let rows = visible_rows(&forest, &state);
        assert_eq!(names(&forest, &rows), ["Alice", "Bob", "Zed"]);
        assert_eq!(rows[1].depth, 1);
    }

    #[test]
    fn deep_expansion_keeps_preorder() {
        let forest = forest();
        let mut state = ChartState::new();
        state.toggle(&forest, forest.roots()[0]);
        let vp = forest.find_by_id(&"vp".into()).unwrap();
        state.toggle(&forest, vp);
        let rows = visible_rows(&forest, &state);
        assert_eq!(names(&forest, &rows), ["Alice", "Bob", "Carol", "Zed"]);
        assert_eq!(rows[2].depth, 2);
    }

    #[test]
    fn collapsing_hides_descendants_but_keeps_their_flags() {
        let forest = forest();
        let mut state = ChartState::new();
        let ceo = forest.roots()[0];
        let vp = forest.find_by_id(&"vp".into()).unwrap();
        state.toggle(&forest, ceo);
        state.toggle(&forest, vp);
        state.toggle(&forest, ceo); // collapse root

        let rows = visible_rows(&forest, &state);
        assert_eq!(names(&forest, &rows), ["Alice", "Zed"]);

        state.toggle(&forest, ceo); // re-expand
        let rows = visible_rows(&forest, &state);
        // Bob reappears still expanded, so Carol is back too.
        assert_eq!(names(&forest, &rows), ["Alice", "Bob", "Carol", "Zed"]);
    }

    #[test]
    fn rows_carry_search_and_detail_flags() {
        let forest = forest();
        let mut state = ChartState::new();
        state.search(&forest, "carol");
        state.toggle_detail(&"vp".into());
        let rows = visible_rows(&forest, &state);
        let carol = rows
            .iter()
            .find(|r| forest.node(r.idx).legal_name() == "Carol")
            .unwrap();
        assert!(carol.search_match);
        let bob = rows
            .iter()
            .find(|r| forest.node(r.idx).legal_name() == "Bob")
            .unwrap();
        assert!(bob.detail_open);
    }

    #[test]
    fn empty_forest_yields_no_rows() {
        let forest = build_hierarchy(Vec::new());
        let state = ChartState::new();
        assert!(visible_rows(&forest, &state).is_empty());
    }
}
