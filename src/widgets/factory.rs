//! Row node construction and in-place patching.
//!
//! [`create`] builds a detached node for a descriptor, registers it as a row
//! and binds its controls. [`patch`] brings an existing row up to date without
//! rebuilding its children. Only item rows, the completed header and the
//! completed section are ever patched; the other kinds are fixed once built.

use crate::dom::node::{NodeData, NodeId};
use crate::event::action::Action;
use crate::reconcile::descriptor::{CategoryHeader, ItemRow, Row, RowDescriptor};
use crate::reconcile::{reconcile, LiveTree, ReconcileStats, RowRecord};

/// Rendered height of one item row, in pixels.
pub const ROW_HEIGHT: u32 = 44;

/// Vertical padding of the expanded completed section, in pixels.
pub const SECTION_PADDING: u32 = 20;

/// Text of the empty-list placeholder.
pub const EMPTY_TEXT: &str = "Your shopping list is empty";

/// Size constraint of the completed section.
///
/// Zero when collapsed, otherwise exactly enough for `rows` item rows.
pub fn section_max_height(rows: usize, collapsed: bool) -> u32 {
    if collapsed {
        return 0;
    }
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    rows.saturating_mul(ROW_HEIGHT).saturating_add(SECTION_PADDING)
}

/// Label of the completed header.
pub fn completed_label(count: usize) -> String {
    format!("Completed ({count})")
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

/// Build a detached node for `desc`.
///
/// The returned stats cover rows created inside the node (the completed
/// section's item rows), not the node itself.
pub fn create(tree: &mut LiveTree, desc: &RowDescriptor) -> (NodeId, ReconcileStats) {
    let key = desc.key.as_str();
    let mut nested = ReconcileStats::default();

    let node = match &desc.row {
        Row::Empty => tree.dom_mut().create(
            NodeData::new("div")
                .with_key(key)
                .with_class("empty-state")
                .with_text(EMPTY_TEXT),
        ),
        Row::CategoryHeader(header) => create_category_header(tree, key, header),
        Row::Item(item) => create_item_row(tree, key, item),
        Row::CompletedHeader { count, collapsed } => {
            create_completed_header(tree, key, *count, *collapsed)
        }
        Row::CompletedSection { items, collapsed } => {
            let section = tree.dom_mut().create(
                NodeData::new("div")
                    .with_key(key)
                    .with_class("completed-section"),
            );
            nested = sync_section(tree, section, items, *collapsed);
            section
        }
        Row::Spacer => tree.dom_mut().create(
            NodeData::new("div")
                .with_key(key)
                .with_class("bottom-pad"),
        ),
    };

    tree.register_row(node, desc.kind());
    (node, nested)
}

fn create_category_header(tree: &mut LiveTree, key: &str, header: &CategoryHeader) -> NodeId {
    let dom = tree.dom_mut();
    let div = dom.create(NodeData::new("div").with_key(key).with_class("category-header"));
    dom.insert_child(
        div,
        NodeData::new("span")
            .with_class("cat-emoji")
            .with_text(header.emoji.as_str()),
    );
    dom.insert_child(
        div,
        NodeData::new("span")
            .with_class("cat-label")
            .with_text(header.label.as_str()),
    );
    if header.offers_bulk_categorize {
        let button = dom.insert_child(
            div,
            NodeData::new("button")
                .with_class("categorize-btn")
                .with_title("Categorize with AI"),
        );
        tree.bind(button, Action::CategorizeUncategorized { button });
    }
    tree.dom_mut()
        .insert_child(div, NodeData::new("span").with_class("line"));
    div
}

fn create_item_row(tree: &mut LiveTree, key: &str, item: &ItemRow) -> NodeId {
    let done = item.completion.is_completed();
    let dom = tree.dom_mut();
    let row = dom.create(
        NodeData::new("div")
            .with_key(key)
            .with_class("item-row")
            .with_class_if("pending", item.pending),
    );
    let checkbox = dom.insert_child(
        row,
        NodeData::new("button")
            .with_class("checkbox")
            .with_class_if("checked", done),
    );
    dom.insert_child(
        row,
        NodeData::new("span")
            .with_class("name")
            .with_class_if("completed", done)
            .with_text(item.name.as_str()),
    );
    let delete = dom.insert_child(
        row,
        NodeData::new("button")
            .with_class("delete-btn")
            .with_title("Remove"),
    );

    tree.bind(checkbox, Action::ToggleItem { row });
    tree.bind(delete, Action::RemoveItem { row });
    tree.set_record(row, record_of(item));
    row
}

fn create_completed_header(tree: &mut LiveTree, key: &str, count: usize, collapsed: bool) -> NodeId {
    let dom = tree.dom_mut();
    let header = dom.create(
        NodeData::new("div")
            .with_key(key)
            .with_class("completed-header"),
    );
    dom.insert_child(header, NodeData::new("span").with_class("line"));
    dom.insert_child(
        header,
        NodeData::new("span")
            .with_class("comp-label")
            .with_text(completed_label(count)),
    );
    dom.insert_child(header, NodeData::new("span").with_class("line"));
    let clear = dom.insert_child(
        header,
        NodeData::new("button")
            .with_class("clear-completed-btn")
            .with_title("Clear all completed items"),
    );
    dom.insert_child(
        header,
        NodeData::new("span")
            .with_class("chevron")
            .with_class_if("collapsed", collapsed),
    );

    tree.bind(header, Action::ToggleCompletedSection);
    tree.bind(clear, Action::ClearCompleted);
    header
}

// ---------------------------------------------------------------------------
// patch
// ---------------------------------------------------------------------------

/// Bring the live row `node` in line with `desc`.
///
/// Static kinds are left alone and report nothing. The caller guarantees that
/// `node` was built for the same kind.
pub fn patch(tree: &mut LiveTree, node: NodeId, desc: &RowDescriptor) -> ReconcileStats {
    let mut stats = ReconcileStats::default();
    if !desc.kind().is_patchable() {
        return stats;
    }

    match &desc.row {
        Row::Item(item) => patch_item_row(tree, node, item),
        Row::CompletedHeader { count, collapsed } => {
            set_text_of(tree, node, "comp-label", &completed_label(*count));
            set_class_of(tree, node, "chevron", "collapsed", *collapsed);
        }
        Row::CompletedSection { items, collapsed } => {
            stats += sync_section(tree, node, items, *collapsed);
        }
        Row::Empty | Row::CategoryHeader(_) | Row::Spacer => {}
    }

    stats.patched += 1;
    tree.lifecycle_mut().on_patch(node);
    stats
}

fn patch_item_row(tree: &mut LiveTree, row: NodeId, item: &ItemRow) {
    let done = item.completion.is_completed();
    tree.set_record(row, record_of(item));
    if let Some(data) = tree.dom_mut().get_mut(row) {
        data.set_class("pending", item.pending);
    }
    set_class_of(tree, row, "checkbox", "checked", done);
    set_text_of(tree, row, "name", &item.name);
    set_class_of(tree, row, "name", "completed", done);
}

/// Reconcile the section's item rows and refresh its size constraint.
fn sync_section(
    tree: &mut LiveTree,
    section: NodeId,
    items: &[ItemRow],
    collapsed: bool,
) -> ReconcileStats {
    let rows: Vec<RowDescriptor> = items.iter().cloned().map(RowDescriptor::item).collect();
    let stats = reconcile(tree, section, &rows);

    if let Some(data) = tree.dom_mut().get_mut(section) {
        data.set_class("collapsed", collapsed);
        data.max_height = Some(section_max_height(items.len(), collapsed));
    }
    stats
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn record_of(item: &ItemRow) -> RowRecord {
    RowRecord {
        uid: item.uid.clone(),
        completion: item.completion,
    }
}

fn set_text_of(tree: &mut LiveTree, row: NodeId, part: &str, text: &str) {
    let Some(target) = tree.dom().find_by_class(row, part) else {
        return;
    };
    if let Some(data) = tree.dom_mut().get_mut(target) {
        data.set_text(text);
    }
}

fn set_class_of(tree: &mut LiveTree, row: NodeId, part: &str, class: &str, on: bool) {
    let Some(target) = tree.dom().find_by_class(row, part) else {
        return;
    };
    if let Some(data) = tree.dom_mut().get_mut(target) {
        data.set_class(class, on);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Completion;
    use crate::reconcile::descriptor::RowKind;
    use pretty_assertions::assert_eq;

    fn setup() -> (LiveTree, NodeId) {
        let mut tree = LiveTree::new();
        let list = tree.insert_root(NodeData::new("div"));
        (tree, list)
    }

    fn classes_of(tree: &LiveTree, row: NodeId, part: &str) -> Vec<String> {
        let node = tree.dom().find_by_class(row, part).unwrap();
        tree.dom().get(node).unwrap().classes.clone()
    }

    fn text_of(tree: &LiveTree, row: NodeId, part: &str) -> String {
        let node = tree.dom().find_by_class(row, part).unwrap();
        tree.dom().get(node).unwrap().text.clone().unwrap_or_default()
    }

    #[test]
    fn max_height_formula() {
        assert_eq!(section_max_height(2, true), 0);
        assert_eq!(section_max_height(2, false), 108);
        assert_eq!(section_max_height(0, false), 20);
    }

    #[test]
    fn item_row_structure_and_bindings() {
        let (mut tree, _) = setup();
        let desc = RowDescriptor::item(ItemRow::new("7", "Milk", Completion::Active));
        let (row, nested) = create(&mut tree, &desc);

        assert_eq!(nested, ReconcileStats::default());
        assert_eq!(tree.kind(row), Some(RowKind::Item));
        assert_eq!(tree.dom().key(row), Some("item:7"));
        assert_eq!(tree.dom().children(row).len(), 3);
        assert_eq!(text_of(&tree, row, "name"), "Milk");

        let checkbox = tree.dom().find_by_class(row, "checkbox").unwrap();
        let delete = tree.dom().find_by_class(row, "delete-btn").unwrap();
        assert_eq!(tree.action(checkbox), Some(Action::ToggleItem { row }));
        assert_eq!(tree.action(delete), Some(Action::RemoveItem { row }));
        assert_eq!(tree.record(row).unwrap().uid, "7");
    }

    #[test]
    fn item_patch_keeps_controls_and_updates_record() {
        let (mut tree, _) = setup();
        let (row, _) = create(
            &mut tree,
            &RowDescriptor::item(ItemRow::new("7", "Milk", Completion::Active)),
        );
        let children_before = tree.dom().children(row).to_vec();

        let mut updated = ItemRow::new("7", "Oat milk", Completion::Completed);
        updated.pending = true;
        let stats = patch(&mut tree, row, &RowDescriptor::item(updated));

        assert_eq!(stats.patched, 1);
        assert_eq!(tree.dom().children(row), children_before.as_slice());
        assert_eq!(text_of(&tree, row, "name"), "Oat milk");
        assert_eq!(classes_of(&tree, row, "checkbox"), vec!["checkbox", "checked"]);
        assert_eq!(classes_of(&tree, row, "name"), vec!["name", "completed"]);
        assert!(tree.dom().get(row).unwrap().has_class("pending"));
        assert_eq!(tree.record(row).unwrap().completion, Completion::Completed);
    }

    #[test]
    fn category_header_with_bulk_action() {
        let (mut tree, _) = setup();
        let desc = RowDescriptor::category(CategoryHeader {
            emoji: "📝".into(),
            label: "UNCATEGORIZED".into(),
            offers_bulk_categorize: true,
        });
        let (header, _) = create(&mut tree, &desc);
        let button = tree.dom().find_by_class(header, "categorize-btn").unwrap();
        assert_eq!(
            tree.action(button),
            Some(Action::CategorizeUncategorized { button })
        );
        assert_eq!(text_of(&tree, header, "cat-label"), "UNCATEGORIZED");
    }

    #[test]
    fn category_header_is_never_patched() {
        let (mut tree, _) = setup();
        let plain = CategoryHeader {
            emoji: "🧀".into(),
            label: "DAIRY".into(),
            offers_bulk_categorize: false,
        };
        let (header, _) = create(&mut tree, &RowDescriptor::category(plain.clone()));
        assert!(tree.dom().find_by_class(header, "categorize-btn").is_none());

        let changed = CategoryHeader {
            emoji: "🥛".into(),
            ..plain
        };
        let stats = patch(&mut tree, header, &RowDescriptor::category(changed));
        assert_eq!(stats, ReconcileStats::default());
        assert_eq!(text_of(&tree, header, "cat-emoji"), "🧀");
    }

    #[test]
    fn completed_header_patch() {
        let (mut tree, _) = setup();
        let (header, _) = create(&mut tree, &RowDescriptor::completed_header(1, false));
        assert_eq!(tree.action(header), Some(Action::ToggleCompletedSection));
        assert_eq!(text_of(&tree, header, "comp-label"), "Completed (1)");

        patch(&mut tree, header, &RowDescriptor::completed_header(3, true));
        assert_eq!(text_of(&tree, header, "comp-label"), "Completed (3)");
        assert_eq!(classes_of(&tree, header, "chevron"), vec!["chevron", "collapsed"]);
    }

    #[test]
    fn completed_section_constraint_follows_collapse() {
        let (mut tree, _) = setup();
        let items = vec![
            ItemRow::new("a", "Jam", Completion::Completed),
            ItemRow::new("b", "Tea", Completion::Completed),
        ];
        let (section, nested) = create(
            &mut tree,
            &RowDescriptor::completed_section(items.clone(), true),
        );
        assert_eq!(nested.created, 2);
        let data = tree.dom().get(section).unwrap();
        assert_eq!(data.max_height, Some(0));
        assert!(data.has_class("collapsed"));

        patch(&mut tree, section, &RowDescriptor::completed_section(items, false));
        let data = tree.dom().get(section).unwrap();
        assert_eq!(data.max_height, Some(2 * ROW_HEIGHT + SECTION_PADDING));
        assert!(!data.has_class("collapsed"));
        assert_eq!(tree.dom().child_keys(section), vec!["item:a", "item:b"]);
    }

    #[test]
    fn empty_and_spacer() {
        let (mut tree, _) = setup();
        let (empty, _) = create(&mut tree, &RowDescriptor::empty());
        let (spacer, _) = create(&mut tree, &RowDescriptor::spacer());
        assert_eq!(tree.dom().get(empty).unwrap().text.as_deref(), Some(EMPTY_TEXT));
        assert!(tree.dom().get(spacer).unwrap().has_class("bottom-pad"));
        assert_eq!(tree.dom().parent(empty), None);
    }
}
