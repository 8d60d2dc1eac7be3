//! Dependency graph construction and ordering.

pub mod builder;
pub mod errors;
pub mod toposort;

pub use builder::{DepMap, DepNode};
pub use errors::GraphError;
pub use toposort::toposort;
