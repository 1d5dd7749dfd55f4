//! Event system: control actions, click resolution and keyboard input.

pub mod action;
pub mod handler;
pub mod input;

pub use action::{Action, Envelope};
pub use handler::{EventDispatcher, HandlerTable};
pub use input::Key;
