#![forbid(unsafe_code)]

//! The chart's interaction state machine.
//!
//! One [`ChartState`] lives per chart mount. Intents arrive serially from
//! the host event loop via [`ChartState::apply`] (or the individual
//! methods), mutate the state, and report what happened as a [`Reaction`]
//! so the embedding layer can decide whether to re-render, show a
//! "no match" notice, and so on.
//!
//! All state is keyed by [`EmployeeId`], not display name: two employees
//! sharing a legal name do not share expansion state. Records with empty
//! ids degrade to sharing the empty key — a flagged data-quality condition.

use crate::search::{SearchOutcome, find_by_name};
use crate::viewport::Viewport;
use orgchart_core::debug;
use orgchart_core::geometry::Bounds;
use orgchart_core::intent::Intent;
use orgchart_core::record::EmployeeId;
use orgchart_hierarchy::{Forest, NodeIdx};
use std::collections::HashSet;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The node's subtree is now shown.
    Expanded,
    /// The node's subtree is now hidden (descendants keep their own flags).
    Collapsed,
    /// The node has no reports; there is nothing to expand.
    Leaf,
}

/// What an applied intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Expansion state changed (or a leaf was clicked).
    Toggled(ToggleOutcome),
    /// A detail panel opened or closed.
    DetailToggled,
    /// Search found and revealed this node.
    SearchMatch(NodeIdx),
    /// Search found nothing; surface a non-blocking notice.
    SearchMiss,
    /// Zoom, scroll, or fit changed the viewport.
    ViewChanged,
    /// All interaction state was reset (dataset change).
    StateReset,
    /// The intent had no effect (unknown id, stray pan move, empty fit).
    Ignored,
}

/// Expansion, detail, search, and viewport state for one chart mount.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    expanded: HashSet<EmployeeId>,
    details: HashSet<EmployeeId>,
    query: String,
    last_match: Option<EmployeeId>,
    viewport: Viewport,
}

impl ChartState {
    /// Fresh state: everything collapsed, no query, default viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a node's subtree is shown.
    #[must_use]
    pub fn is_expanded(&self, id: &EmployeeId) -> bool {
        self.expanded.contains(id)
    }

    /// Whether a node's detail panel is open.
    #[must_use]
    pub fn is_detail_open(&self, id: &EmployeeId) -> bool {
        self.details.contains(id)
    }

    /// Whether a node is the most recent search hit.
    #[must_use]
    pub fn is_search_match(&self, id: &EmployeeId) -> bool {
        self.last_match.as_ref() == Some(id)
    }

    /// The last search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The viewport (zoom, scroll, pan gesture).
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport access for direct gesture wiring.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Toggle a node's expansion. Leaves are never expandable.
    ///
    /// Collapsing does not touch descendants' flags: they reappear in their
    /// prior state when the node re-expands.
    pub fn toggle(&mut self, forest: &Forest, idx: NodeIdx) -> ToggleOutcome {
        let node = forest.node(idx);
        if node.is_leaf() {
            return ToggleOutcome::Leaf;
        }
        let id = node.id();
        if self.expanded.remove(id) {
            ToggleOutcome::Collapsed
        } else {
            self.expanded.insert(id.clone());
            ToggleOutcome::Expanded
        }
    }

    /// Collapse every node.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Open or close a node's detail panel.
    pub fn toggle_detail(&mut self, id: &EmployeeId) {
        if !self.details.remove(id) {
            self.details.insert(id.clone());
        }
    }

    /// Search by name substring and reveal the first match.
    ///
    /// On a hit, every node on the root-to-match path is expanded so the
    /// match is actually visible, and the match is remembered for
    /// [`is_search_match`]. On a miss the previous match highlight is
    /// cleared and [`SearchOutcome::NoMatch`] is returned for the embedding
    /// layer to present.
    ///
    /// [`is_search_match`]: ChartState::is_search_match
    pub fn search(&mut self, forest: &Forest, query: &str) -> SearchOutcome {
        self.query = query.to_string();
        if query.is_empty() {
            self.last_match = None;
            return SearchOutcome::EmptyQuery;
        }
        match find_by_name(forest, query) {
            Some(idx) => {
                for step in forest.path_to(idx) {
                    self.expanded.insert(forest.node(step).id().clone());
                }
                let id = forest.node(idx).id().clone();
                debug!(%id, query, "search matched");
                self.last_match = Some(id);
                SearchOutcome::Match(idx)
            }
            None => {
                debug!(query, "search matched nothing");
                self.last_match = None;
                SearchOutcome::NoMatch
            }
        }
    }

    /// Reset all interaction state (dataset change / unmount-remount).
    pub fn reset(&mut self) {
        self.expanded.clear();
        self.details.clear();
        self.query.clear();
        self.last_match = None;
        self.viewport.reset();
    }

    /// Apply one user intent.
    ///
    /// `measure` supplies the rendered bounds of a visible node for
    /// [`Intent::FitToView`]; layout measurement stays with the rendering
    /// layer. Nodes it returns `None` for are skipped.
    pub fn apply<F>(&mut self, forest: &Forest, intent: Intent, mut measure: F) -> Reaction
    where
        F: FnMut(NodeIdx) -> Option<Bounds>,
    {
        match intent {
            Intent::ToggleNode(id) => match forest.find_by_id(&id) {
                Some(idx) => Reaction::Toggled(self.toggle(forest, idx)),
                None => Reaction::Ignored,
            },
            Intent::ToggleDetail(id) => {
                self.toggle_detail(&id);
                Reaction::DetailToggled
            }
            Intent::Search(query) => match self.search(forest, &query) {
                SearchOutcome::Match(idx) => Reaction::SearchMatch(idx),
                SearchOutcome::NoMatch => Reaction::SearchMiss,
                SearchOutcome::EmptyQuery => Reaction::Ignored,
            },
            Intent::Zoom(delta) => {
                self.viewport.zoom_by(delta);
                Reaction::ViewChanged
            }
            Intent::PanStart(point) => {
                self.viewport.pan_start(point);
                Reaction::ViewChanged
            }
            Intent::PanMove(point) => match self.viewport.pan_move(point) {
                Some(_) => Reaction::ViewChanged,
                None => Reaction::Ignored,
            },
            Intent::PanEnd => {
                if self.viewport.pan_end() {
                    Reaction::ViewChanged
                } else {
                    Reaction::Ignored
                }
            }
            Intent::FitToView(container) => {
                let visible = crate::rows::visible_rows(forest, self);
                let bounds: Vec<Bounds> =
                    visible.iter().filter_map(|row| measure(row.idx)).collect();
                match self.viewport.fit_to_view(bounds, container) {
                    Some(_) => Reaction::ViewChanged,
                    None => Reaction::Ignored,
                }
            }
            Intent::DatasetChanged => {
                self.reset();
                Reaction::StateReset
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_core::geometry::Point;
    use orgchart_core::record::EmployeeRecord;
    use orgchart_hierarchy::build_hierarchy;

    fn forest() -> Forest {
        build_hierarchy(vec![
            EmployeeRecord::new("ceo", "Alice Chief"),
            EmployeeRecord::new("vp", "Bob Veep").reporting_to("Alice Chief"),
            EmployeeRecord::new("ic", "Carol Coder").reporting_to("Bob Veep"),
            EmployeeRecord::new("ic2", "Dan Dev").reporting_to("Bob Veep"),
        ])
    }

    fn no_measure(_: NodeIdx) -> Option<Bounds> {
        None
    }

    #[test]
    fn double_toggle_is_identity() {
        let forest = forest();
        let mut state = ChartState::new();
        let ceo = forest.roots()[0];
        let before = state.clone().expanded;

        assert_eq!(state.toggle(&forest, ceo), ToggleOutcome::Expanded);
        assert!(state.is_expanded(&"ceo".into()));
        assert_eq!(state.toggle(&forest, ceo), ToggleOutcome::Collapsed);
        assert_eq!(state.expanded, before);
    }

    #[test]
    fn leaves_are_never_expandable() {
        let forest = forest();
        let mut state = ChartState::new();
        let ic = forest.find_by_id(&"ic".into()).unwrap();
        assert_eq!(state.toggle(&forest, ic), ToggleOutcome::Leaf);
        assert!(!state.is_expanded(&"ic".into()));
    }

    #[test]
    fn collapsing_parent_keeps_descendant_flags() {
        let forest = forest();
        let mut state = ChartState::new();
        let ceo = forest.roots()[0];
        let vp = forest.find_by_id(&"vp".into()).unwrap();

        state.toggle(&forest, ceo);
        state.toggle(&forest, vp);
        state.toggle(&forest, ceo); // collapse the root

        // vp is hidden but still flagged expanded for when ceo reopens.
        assert!(state.is_expanded(&"vp".into()));
        assert!(!state.is_expanded(&"ceo".into()));
    }

    #[test]
    fn collapse_all_clears_every_flag() {
        let forest = forest();
        let mut state = ChartState::new();
        state.toggle(&forest, forest.roots()[0]);
        state.collapse_all();
        assert!(!state.is_expanded(&"ceo".into()));
    }

    #[test]
    fn search_reveals_ancestor_chain() {
        let forest = forest();
        let mut state = ChartState::new();

        let outcome = state.search(&forest, "carol");
        let idx = outcome.matched().unwrap();
        assert_eq!(forest.node(idx).legal_name(), "Carol Coder");

        // The whole path to the match is expanded, so it actually renders.
        assert!(state.is_expanded(&"ceo".into()));
        assert!(state.is_expanded(&"vp".into()));
        assert!(state.is_search_match(&"ic".into()));
        assert_eq!(state.query(), "carol");
    }

    #[test]
    fn search_miss_clears_previous_match() {
        let forest = forest();
        let mut state = ChartState::new();
        state.search(&forest, "carol");
        assert_eq!(state.search(&forest, "zzz"), SearchOutcome::NoMatch);
        assert!(!state.is_search_match(&"ic".into()));
    }

    #[test]
    fn empty_search_is_empty_query() {
        let forest = forest();
        let mut state = ChartState::new();
        assert_eq!(state.search(&forest, ""), SearchOutcome::EmptyQuery);
    }

    #[test]
    fn detail_panels_toggle_independently() {
        let mut state = ChartState::new();
        state.toggle_detail(&"ceo".into());
        state.toggle_detail(&"vp".into());
        assert!(state.is_detail_open(&"ceo".into()));
        state.toggle_detail(&"ceo".into());
        assert!(!state.is_detail_open(&"ceo".into()));
        assert!(state.is_detail_open(&"vp".into()));
    }

    #[test]
    fn reset_clears_everything() {
        let forest = forest();
        let mut state = ChartState::new();
        state.toggle(&forest, forest.roots()[0]);
        state.search(&forest, "carol");
        state.toggle_detail(&"vp".into());
        state.viewport_mut().zoom_by(0.5);

        state.reset();
        assert!(!state.is_expanded(&"ceo".into()));
        assert!(!state.is_detail_open(&"vp".into()));
        assert_eq!(state.query(), "");
        assert_eq!(state.viewport().zoom(), 1.0);
    }

    #[test]
    fn apply_dispatches_toggle_and_ignores_unknown_ids() {
        let forest = forest();
        let mut state = ChartState::new();
        assert_eq!(
            state.apply(&forest, Intent::ToggleNode("ceo".into()), no_measure),
            Reaction::Toggled(ToggleOutcome::Expanded)
        );
        assert_eq!(
            state.apply(&forest, Intent::ToggleNode("nobody".into()), no_measure),
            Reaction::Ignored
        );
    }

    #[test]
    fn apply_search_reports_match_and_miss() {
        let forest = forest();
        let mut state = ChartState::new();
        assert!(matches!(
            state.apply(&forest, Intent::Search("dan".into()), no_measure),
            Reaction::SearchMatch(_)
        ));
        assert_eq!(
            state.apply(&forest, Intent::Search("zzz".into()), no_measure),
            Reaction::SearchMiss
        );
    }

    #[test]
    fn apply_pan_sequence() {
        let forest = forest();
        let mut state = ChartState::new();
        assert_eq!(
            state.apply(&forest, Intent::PanMove(Point::ZERO), no_measure),
            Reaction::Ignored
        );
        state.apply(&forest, Intent::PanStart(Point::ZERO), no_measure);
        assert_eq!(
            state.apply(
                &forest,
                Intent::PanMove(Point::new(10.0, 0.0)),
                no_measure
            ),
            Reaction::ViewChanged
        );
        assert_eq!(
            state.apply(&forest, Intent::PanEnd, no_measure),
            Reaction::ViewChanged
        );
    }

    #[test]
    fn apply_fit_measures_only_visible_rows() {
        let forest = forest();
        let mut state = ChartState::new();
        let container = Bounds::from_size(100.0, 100.0);

        // Collapsed chart: only the root is visible.
        let mut measured = Vec::new();
        let reaction = state.apply(&forest, Intent::FitToView(container), |idx| {
            measured.push(idx);
            Some(Bounds::from_size(100.0, 100.0))
        });
        assert_eq!(reaction, Reaction::ViewChanged);
        assert_eq!(measured, vec![forest.roots()[0]]);
    }

    #[test]
    fn apply_fit_with_no_measurements_is_ignored() {
        let forest = forest();
        let mut state = ChartState::new();
        assert_eq!(
            state.apply(
                &forest,
                Intent::FitToView(Bounds::from_size(10.0, 10.0)),
                no_measure
            ),
            Reaction::Ignored
        );
    }

    #[test]
    fn apply_dataset_changed_resets() {
        let forest = forest();
        let mut state = ChartState::new();
        state.search(&forest, "carol");
        assert_eq!(
            state.apply(&forest, Intent::DatasetChanged, no_measure),
            Reaction::StateReset
        );
        assert!(!state.is_expanded(&"ceo".into()));
    }
}
