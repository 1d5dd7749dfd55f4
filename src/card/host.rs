//! Snapshots of host state pushed into the card.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entity's state as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    pub state: String,
    /// Opaque change marker. Compared for equality only.
    #[serde(default)]
    pub last_changed: Option<String>,
}

/// A snapshot of the host's entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContext {
    #[serde(default)]
    pub states: HashMap<String, EntityState>,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entity (builder).
    pub fn with_entity(
        mut self,
        entity: impl Into<String>,
        state: impl Into<String>,
        last_changed: impl Into<String>,
    ) -> Self {
        self.states.insert(
            entity.into(),
            EntityState {
                state: state.into(),
                last_changed: Some(last_changed.into()),
            },
        );
        self
    }

    pub fn entity(&self, id: &str) -> Option<&EntityState> {
        self.states.get(id)
    }

    /// The change marker of `id`, if the entity is known.
    pub fn last_changed(&self, id: &str) -> Option<&str> {
        self.entity(id).and_then(|e| e.last_changed.as_deref())
    }

    /// Whether boolean entity `id` is on.
    pub fn is_on(&self, id: &str) -> bool {
        self.entity(id).is_some_and(|e| e.state == "on")
    }
}
