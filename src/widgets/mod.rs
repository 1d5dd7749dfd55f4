//! Row widgets built by the reconciler, and the add-item text field.

pub mod factory;
pub mod input;

pub use factory::{completed_label, section_max_height, EMPTY_TEXT, ROW_HEIGHT};
pub use input::{AddItemInput, InputOutcome, PLACEHOLDER};
