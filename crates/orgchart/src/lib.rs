#![forbid(unsafe_code)]

//! Org chart core public facade.
//!
//! Re-exports the stable surface of the internal crates and offers a
//! lightweight prelude. The flow is: flat records in, [`build_hierarchy`]
//! reconstructs the forest, a [`ChartState`] absorbs user intents, and the
//! renderer reads [`visible_rows`] plus the per-node accessors back out.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use orgchart_core::geometry::{Bounds, Point};
pub use orgchart_core::intent::Intent;
pub use orgchart_core::record::{EmployeeId, EmployeeRecord, RecordFlags};

// --- Hierarchy re-exports --------------------------------------------------

pub use orgchart_hierarchy::{Forest, NodeIdx, TreeNode, build_hierarchy};

// --- State re-exports ------------------------------------------------------

pub use orgchart_state::{
    ChartState, Fit, MAX_ZOOM, MIN_ZOOM, PanConfig, Reaction, SearchOutcome, ToggleOutcome,
    Viewport, VisibleRow, find_by_name, visible_rows,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for embedding boundaries.
///
/// The interaction core itself never fails: malformed records degrade to
/// flagged nodes and misses are ordinary outcomes. Errors only arise when
/// loading a dataset into records.
#[derive(Debug)]
pub enum Error {
    /// A dataset could not be parsed into employee records.
    Dataset(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dataset(err) => write!(f, "dataset parse error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Dataset(err)
    }
}

/// Standard result type for orgchart embedding APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Bounds, ChartState, EmployeeId, EmployeeRecord, Error, Forest, Intent, NodeIdx, Point,
        Reaction, Result, SearchOutcome, build_hierarchy, visible_rows,
    };
}
