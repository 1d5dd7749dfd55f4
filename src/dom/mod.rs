//! Live view tree: slotmap-backed node arena with keyed child queries.

pub mod node;
pub mod tree;
pub mod query;

pub use node::{NodeId, NodeData};
pub use tree::Dom;
