//! Domain model: list items and the category tag codec.

pub mod category;
pub mod item;

pub use category::{ItemText, DEFAULT_CATEGORY_ORDER, UNCATEGORIZED_LABEL};
pub use item::{Completion, ListItem};
