//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a view node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single view node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Element tag (e.g. "div", "button", "span").
    pub tag: String,
    /// Reconciliation key. Children without a key are ignored by the reconciler.
    pub key: Option<String>,
    /// Class names, used for visual state (`checked`, `collapsed`, `removing`, ...).
    pub classes: Vec<String>,
    /// Text content, if the node displays any.
    pub text: Option<String>,
    /// Tooltip / accessible title.
    pub title: Option<String>,
    /// Size constraint in pixels. `None` means unconstrained.
    pub max_height: Option<u32>,
    /// Whether this node can receive input focus.
    pub focusable: bool,
}

impl NodeData {
    /// Create a new `NodeData` with the given tag and sensible defaults.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            classes: Vec::new(),
            text: None,
            title: None,
            max_height: None,
            focusable: false,
        }
    }

    /// Set the reconciliation key (builder).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add a class only when `on` is true (builder).
    pub fn with_class_if(self, class: impl Into<String>, on: bool) -> Self {
        if on {
            self.with_class(class)
        } else {
            self
        }
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set whether this node can receive focus (builder).
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Force a class on or off.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Replace the text content. Returns `true` if it changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text.as_deref() == Some(text) {
            return false;
        }
        self.text = Some(text.to_owned());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("div");
        assert_eq!(data.tag, "div");
        assert!(data.key.is_none());
        assert!(data.classes.is_empty());
        assert!(data.text.is_none());
        assert!(data.max_height.is_none());
        assert!(!data.focusable);
    }

    #[test]
    fn builder_with_key_and_text() {
        let data = NodeData::new("span").with_key("item:1").with_text("Milk");
        assert_eq!(data.key.as_deref(), Some("item:1"));
        assert_eq!(data.text.as_deref(), Some("Milk"));
    }

    #[test]
    fn builder_with_class_dedup() {
        let data = NodeData::new("div").with_class("row").with_class("row");
        assert_eq!(data.classes, vec!["row"]);
    }

    #[test]
    fn builder_with_class_if() {
        let data = NodeData::new("button")
            .with_class("checkbox")
            .with_class_if("checked", false)
            .with_class_if("big", true);
        assert_eq!(data.classes, vec!["checkbox", "big"]);
    }

    #[test]
    fn set_class_forces_state() {
        let mut data = NodeData::new("span");
        data.set_class("collapsed", true);
        data.set_class("collapsed", true);
        assert_eq!(data.classes, vec!["collapsed"]);
        data.set_class("collapsed", false);
        assert!(!data.has_class("collapsed"));
    }

    #[test]
    fn remove_class_noop() {
        let mut data = NodeData::new("X");
        data.remove_class("nonexistent");
        assert!(data.classes.is_empty());
    }

    #[test]
    fn set_text_reports_change() {
        let mut data = NodeData::new("span").with_text("a");
        assert!(!data.set_text("a"));
        assert!(data.set_text("b"));
        assert_eq!(data.text.as_deref(), Some("b"));
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
