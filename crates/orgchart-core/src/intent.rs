#![forbid(unsafe_code)]

//! Canonical user-intent types.
//!
//! The rendering layer translates raw input (clicks, keypresses, pointer
//! drags) into these intents and feeds them to the chart state serially.
//! Intents are plain data and derive `Clone`/`PartialEq` for use in tests.

use crate::geometry::{Bounds, Point};
use crate::record::EmployeeId;

/// A discrete user intent accepted by the chart core.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Toggle a node's expansion (a click on the node).
    ToggleNode(EmployeeId),

    /// Toggle a node's detail panel (a click on its details affordance).
    ToggleDetail(EmployeeId),

    /// Search for a node by name substring and reveal the first match.
    Search(String),

    /// Adjust the zoom factor by a signed delta.
    Zoom(f64),

    /// Pointer pressed: begin a pan gesture.
    PanStart(Point),

    /// Pointer moved while panning.
    PanMove(Point),

    /// Pointer released or left the surface: end the pan gesture.
    PanEnd,

    /// Fit all visible nodes into the given container bounds.
    FitToView(Bounds),

    /// The underlying dataset changed (e.g. department switch); reset all
    /// interaction state.
    DatasetChanged,
}
