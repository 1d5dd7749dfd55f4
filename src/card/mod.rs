//! The card: configuration, host snapshots, row derivation and the
//! [`ShoppingListCard`] that ties them to the live tree.

pub mod config;
pub mod debounce;
pub mod focus;
pub mod host;
pub mod orchestrator;
pub mod shell;
pub mod shopping_list;

pub use config::CardConfig;
pub use debounce::{Debouncer, REFRESH_DEBOUNCE};
pub use focus::{FocusGuard, RenderDecision};
pub use host::{EntityState, HostContext};
pub use orchestrator::{build_rows, RenderState};
pub use shell::Shell;
pub use shopping_list::{ShoppingListCard, SORT_POLL_INTERVAL, SORT_TIMEOUT};
