//! `ListItem`: one entry of the backing list, as the store reports it.

use serde::{Deserialize, Serialize};

use super::category::{self, ItemText};

/// Completion state of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    /// Still to buy. Serialized as `needs_action`.
    #[default]
    #[serde(rename = "needs_action")]
    Active,
    Completed,
}

impl Completion {
    /// The opposite state (what a checkbox click asks for).
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Completed,
            Self::Completed => Self::Active,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

/// One entry in the remote list. Owned by the store; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Opaque identifier, unique among live items.
    pub uid: String,
    /// Free-form text, optionally prefixed with a `[CATEGORY]` tag.
    #[serde(rename = "summary")]
    pub text: String,
    #[serde(rename = "status", default)]
    pub completion: Completion,
}

impl ListItem {
    /// An active item.
    pub fn new(uid: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            text: text.into(),
            completion: Completion::Active,
        }
    }

    /// A completed item.
    pub fn completed(uid: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            completion: Completion::Completed,
            ..Self::new(uid, text)
        }
    }

    /// Decode the category tag out of the text.
    pub fn parsed(&self) -> ItemText {
        category::parse(&self.text)
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggled_flips() {
        assert_eq!(Completion::Active.toggled(), Completion::Completed);
        assert_eq!(Completion::Completed.toggled(), Completion::Active);
    }

    #[test]
    fn deserializes_store_wire_format() {
        let json = r#"[
            {"uid": "a1", "summary": "[DAIRY] Milk", "status": "needs_action"},
            {"uid": "b2", "summary": "Bread", "status": "completed"},
            {"uid": "c3", "summary": "Eggs"}
        ]"#;
        let items: Vec<ListItem> = serde_json::from_str(json).unwrap();
        assert_eq!(
            items,
            vec![
                ListItem::new("a1", "[DAIRY] Milk"),
                ListItem::completed("b2", "Bread"),
                ListItem::new("c3", "Eggs"),
            ]
        );
    }

    #[test]
    fn serializes_status_names() {
        let value = serde_json::to_value(ListItem::completed("x", "Tea")).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["summary"], "Tea");
        let value = serde_json::to_value(ListItem::new("y", "Jam")).unwrap();
        assert_eq!(value["status"], "needs_action");
    }

    #[test]
    fn parsed_uses_category_codec() {
        let item = ListItem::new("1", "[PRODUCE] Apples");
        let parsed = item.parsed();
        assert_eq!(parsed.category.as_deref(), Some("PRODUCE"));
        assert_eq!(parsed.name, "Apples");
    }
}
