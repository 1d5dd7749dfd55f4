//! Card configuration: decoded from the host's configuration object.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::category;

/// Title shown when none is configured.
pub const DEFAULT_TITLE: &str = "Shopping List";

/// Button entity pressed to start the host's sort workflow.
pub const DEFAULT_SORT_BUTTON_ENTITY: &str = "input_button.sort_shopping_list_button";

/// Boolean entity holding the auto-categorize switch.
pub const DEFAULT_AUTO_SORT_ENTITY: &str = "input_boolean.auto_sort_shopping_list";

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_sort_button_entity() -> Option<String> {
    Some(DEFAULT_SORT_BUTTON_ENTITY.to_owned())
}

fn default_auto_sort_entity() -> Option<String> {
    Some(DEFAULT_AUTO_SORT_ENTITY.to_owned())
}

// ---------------------------------------------------------------------------
// CardConfig
// ---------------------------------------------------------------------------

/// Configuration for one card.
///
/// `sort_button_entity` and `auto_sort_entity` default to the well-known
/// entity ids; an explicit `null` turns the corresponding control off, which
/// gives the reduced card without sort controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// The backing list entity. Required.
    #[serde(default)]
    pub entity: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_sort_button_entity")]
    pub sort_button_entity: Option<String>,
    #[serde(default = "default_auto_sort_entity")]
    pub auto_sort_entity: Option<String>,
    /// Display order of named categories. Empty means the built-in order.
    #[serde(default)]
    pub category_order: Vec<String>,
}

impl CardConfig {
    /// Create a config for `entity` with every other option at its default.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            title: default_title(),
            sort_button_entity: default_sort_button_entity(),
            auto_sort_entity: default_auto_sort_entity(),
            category_order: Vec::new(),
        }
    }

    /// Decode and validate a host configuration object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()
    }

    /// Reject configurations the card cannot run with.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.entity.trim().is_empty() {
            return Err(ConfigError::MissingEntity);
        }
        self.category_order = self
            .category_order
            .iter()
            .filter_map(|label| category::normalize_label(label))
            .collect();
        Ok(self)
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set or clear the sort button entity (builder).
    pub fn with_sort_button_entity(mut self, entity: Option<&str>) -> Self {
        self.sort_button_entity = entity.map(str::to_owned);
        self
    }

    /// Set or clear the auto-sort switch entity (builder).
    pub fn with_auto_sort_entity(mut self, entity: Option<&str>) -> Self {
        self.auto_sort_entity = entity.map(str::to_owned);
        self
    }

    /// Set the category display order (builder).
    pub fn with_category_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// The category order in effect: the configured one, or the built-in one.
    pub fn effective_category_order(&self) -> Vec<String> {
        if self.category_order.is_empty() {
            category::default_order()
        } else {
            self.category_order.clone()
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn minimal_config_gets_defaults() {
        let config = CardConfig::from_value(json!({ "entity": "todo.groceries" })).unwrap();
        assert_eq!(config, CardConfig::new("todo.groceries"));
        assert_eq!(config.title, "Shopping List");
        assert_eq!(
            config.sort_button_entity.as_deref(),
            Some(DEFAULT_SORT_BUTTON_ENTITY)
        );
    }

    #[test]
    fn missing_entity_is_rejected() {
        let err = CardConfig::from_value(json!({ "title": "Groceries" })).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEntity));

        let err = CardConfig::from_value(json!({ "entity": "  " })).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEntity));
    }

    #[test]
    fn wrong_types_are_invalid() {
        let err = CardConfig::from_value(json!({ "entity": 42 })).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn null_entities_disable_controls() {
        let config = CardConfig::from_value(json!({
            "entity": "todo.shopping_list",
            "sort_button_entity": null,
            "auto_sort_entity": null,
        }))
        .unwrap();
        assert!(config.sort_button_entity.is_none());
        assert!(config.auto_sort_entity.is_none());
    }

    #[test]
    fn category_order_is_normalized() {
        let config = CardConfig::from_value(json!({
            "entity": "todo.shopping_list",
            "category_order": ["dairy", " Produce ", ""],
        }))
        .unwrap();
        assert_eq!(config.category_order, vec!["DAIRY", "PRODUCE"]);
        assert_eq!(config.effective_category_order(), vec!["DAIRY", "PRODUCE"]);
    }

    #[test]
    fn empty_order_falls_back_to_default() {
        let config = CardConfig::new("todo.shopping_list");
        assert_eq!(config.effective_category_order()[0], "PRODUCE");
        assert_eq!(config.effective_category_order().len(), 11);
    }

    #[test]
    fn builder_methods() {
        let config = CardConfig::new("todo.x")
            .with_title("Groceries")
            .with_sort_button_entity(None)
            .with_auto_sort_entity(Some("input_boolean.sorter"))
            .with_category_order(["SNACKS"]);
        assert_eq!(config.title, "Groceries");
        assert!(config.sort_button_entity.is_none());
        assert_eq!(config.auto_sort_entity.as_deref(), Some("input_boolean.sorter"));
        assert_eq!(config.category_order, vec!["SNACKS"]);
    }
}
