//! Headless testing support: in-memory collaborators, Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive a [`ShoppingListCard`](crate::card::ShoppingListCard)
//! without a host. Use [`render_to_string`] to capture a view subtree as plain
//! text for snapshot-style assertions.

pub mod doubles;
pub mod pilot;
pub mod snapshot;

pub use doubles::{MemoryStore, RecordingServices, ScriptedCategorizer, ServiceCall, StoreCall};
pub use pilot::{host_context, Pilot, LIST_ENTITY};
pub use snapshot::{describe_node, render_to_string};
