#![forbid(unsafe_code)]

//! Hierarchy reconstruction: flat employee records to a rooted forest.

pub mod builder;
pub mod forest;

pub use builder::build_hierarchy;
pub use forest::{Forest, NodeIdx, TreeNode};
