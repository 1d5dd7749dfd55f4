//! # grouped-shopping-list
//!
//! A categorized shopping list card over a remote to-do list, rendered into a
//! retained view tree by a keyed, identity-preserving reconciler.
//!
//! Items carry an optional `[CATEGORY]` tag in their text. The card groups
//! active items under category headers, folds completed items into a
//! collapsible section, and keeps every surviving row node alive across
//! refreshes so in-flight transitions and visual state are never reset.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: Slotmap-backed view tree arena with keyed child queries
//! - **[`model`]**: List items and the category tag codec
//! - **[`reconcile`]**: Row descriptors, the keyed reconciler, removal transitions, lifecycle log
//! - **[`widgets`]**: Row node factory and the add-item text field
//! - **[`event`]**: Control actions, click resolution, keyboard input
//! - **[`card`]**: Configuration, host snapshots, grouping, the card itself
//! - **[`store`]** / **[`categorize`]**: Remote collaborator interfaces
//! - **[`testing`]**: In-memory collaborators, Pilot, snapshot helpers

// Foundation
pub mod error;
pub mod model;

// View tree
pub mod dom;
pub mod reconcile;
pub mod widgets;

// Events
pub mod event;

// Collaborators
pub mod categorize;
pub mod store;

// Card
pub mod card;

// Headless testing
pub mod testing;

pub use card::{CardConfig, HostContext, ShoppingListCard};
pub use error::{ConfigError, RemoteError};
pub use model::{Completion, ListItem};
