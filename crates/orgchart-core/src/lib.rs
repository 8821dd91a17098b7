#![forbid(unsafe_code)]

//! Core vocabulary: employee records, canvas geometry, and interaction intents.

pub mod geometry;
pub mod intent;
pub mod logging;
pub mod record;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, warn};
