#![forbid(unsafe_code)]

//! Interaction state for the org chart.
//!
//! Everything in this crate is synchronous and single-threaded: intents
//! arrive serially from the host event loop, mutate one state object, and
//! the renderer re-reads the forest through [`rows::visible_rows`]. The
//! forest itself is immutable and shared by read-only reference.

pub mod chart_state;
pub mod rows;
pub mod search;
pub mod viewport;

pub use chart_state::{ChartState, Reaction, ToggleOutcome};
pub use rows::{VisibleRow, visible_rows};
pub use search::{SearchOutcome, find_by_name};
pub use viewport::{Fit, MAX_ZOOM, MIN_ZOOM, PanConfig, Viewport};
