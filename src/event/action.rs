//! Control actions and the envelope that carries them.
//!
//! An [`Action`] describes *what* a control does, never the data it acts on.
//! Row-scoped actions name the row node; the current uid and completion state
//! are read from the row side table when the action runs, so a patched row's
//! next click acts on the patched values.

use std::fmt;

use crate::dom::node::NodeId;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Behaviour bound to a control node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flip the completion state of the item shown by `row`.
    ToggleItem { row: NodeId },
    /// Remove the item shown by `row` from the list.
    RemoveItem { row: NodeId },
    /// Collapse or expand the completed section.
    ToggleCompletedSection,
    /// Remove every completed item.
    ClearCompleted,
    /// Categorize all uncategorized active items. `button` shows progress.
    CategorizeUncategorized { button: NodeId },
    /// Start the external sort workflow.
    TriggerSort,
    /// Flip the host's auto-sort switch.
    ToggleAutoSort,
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleItem { .. } => "ToggleItem",
            Self::RemoveItem { .. } => "RemoveItem",
            Self::ToggleCompletedSection => "ToggleCompletedSection",
            Self::ClearCompleted => "ClearCompleted",
            Self::CategorizeUncategorized { .. } => "CategorizeUncategorized",
            Self::TriggerSort => "TriggerSort",
            Self::ToggleAutoSort => "ToggleAutoSort",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// An action resolved from a click, with routing metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    pub action: Action,
    /// The node the click landed on.
    pub sender: NodeId,
    /// The node whose handler matched (the sender or one of its ancestors).
    pub handler: NodeId,
}

impl Envelope {
    pub fn new(action: Action, sender: NodeId, handler: NodeId) -> Self {
        Self {
            action,
            sender,
            handler,
        }
    }

    /// Whether the handler was found on an ancestor rather than the sender.
    pub fn bubbled(&self) -> bool {
        self.sender != self.handler
    }
}

// ===========================================================================
// Tests
// ===========================================================================
