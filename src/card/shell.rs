//! The static frame around the item list.
//!
//! Built once per configuration. The text field and the items container live
//! here, outside anything the reconciler touches, so refreshes never replace
//! the field the user is typing into.

use crate::dom::node::{NodeData, NodeId};
use crate::event::action::Action;
use crate::reconcile::LiveTree;
use crate::widgets::input::PLACEHOLDER;

use super::config::CardConfig;

pub const SORT_TITLE: &str = "Sort & categorize all items";
pub const AUTO_SORT_ON_TITLE: &str = "Auto-categorize: ON";
pub const AUTO_SORT_OFF_TITLE: &str = "Auto-categorize: OFF";
pub const CATEGORIZING_TEXT: &str = "Categorizing...";

/// Ids of the shell nodes the card updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    pub root: NodeId,
    pub sort_button: Option<NodeId>,
    pub auto_sort_button: Option<NodeId>,
    pub count_badge: NodeId,
    pub add_row: NodeId,
    pub input: NodeId,
    /// Container the row sequence is reconciled into.
    pub items: NodeId,
}

impl Shell {
    /// Build the shell as the root of `tree`.
    pub fn build(tree: &mut LiveTree, config: &CardConfig) -> Self {
        let root = tree.insert_root(NodeData::new("ha-card"));

        let dom = tree.dom_mut();
        let header = dom.insert_child(root, NodeData::new("div").with_class("card-header"));
        dom.insert_child(
            header,
            NodeData::new("span")
                .with_class("title")
                .with_text(config.title.as_str()),
        );
        let actions = dom.insert_child(header, NodeData::new("div").with_class("header-actions"));

        let sort_button = config.sort_button_entity.as_ref().map(|_| {
            let button = tree.dom_mut().insert_child(
                actions,
                NodeData::new("button")
                    .with_class("header-btn")
                    .with_class("sort-btn")
                    .with_title(SORT_TITLE),
            );
            tree.bind(button, Action::TriggerSort);
            button
        });

        let auto_sort_button = config.auto_sort_entity.as_ref().map(|_| {
            let button = tree.dom_mut().insert_child(
                actions,
                NodeData::new("button")
                    .with_class("header-btn")
                    .with_class("auto-sort-btn")
                    .with_title(AUTO_SORT_OFF_TITLE),
            );
            tree.bind(button, Action::ToggleAutoSort);
            button
        });

        let dom = tree.dom_mut();
        let count_badge = dom.insert_child(
            actions,
            NodeData::new("span").with_class("count").with_text("0"),
        );

        let add_row = dom.insert_child(root, NodeData::new("div").with_class("add-item-row"));
        let input = dom.insert_child(
            add_row,
            NodeData::new("input")
                .with_class("add-input")
                .with_title(PLACEHOLDER)
                .with_text("")
                .focusable(true),
        );
        dom.insert_child(
            add_row,
            NodeData::new("div")
                .with_class("categorizing-indicator")
                .with_text(CATEGORIZING_TEXT),
        );

        let items = dom.insert_child(root, NodeData::new("div").with_class("items"));

        Self {
            root,
            sort_button,
            auto_sort_button,
            count_badge,
            add_row,
            input,
            items,
        }
    }
}
