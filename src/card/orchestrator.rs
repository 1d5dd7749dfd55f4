//! Derive the desired row sequence from list items and view-local state.

use std::collections::{HashMap, HashSet};

use crate::model::category::{self, UNCATEGORIZED_EMOJI, UNCATEGORIZED_LABEL};
use crate::model::ListItem;
use crate::reconcile::descriptor::{CategoryHeader, ItemRow, RowDescriptor};

/// View-local inputs to [`build_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub completed_collapsed: bool,
    /// Display order of named categories.
    pub category_order: Vec<String>,
    /// Uids with a background operation in flight.
    pub pending: HashSet<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            completed_collapsed: true,
            category_order: category::default_order(),
            pending: HashSet::new(),
        }
    }
}

/// Build the top-level row sequence for `items`.
///
/// Uncategorized active items lead, then each named category in display
/// order, then the completed header and section, then the spacer. An empty
/// list yields the placeholder and the spacer only.
pub fn build_rows(items: &[ListItem], state: &RenderState) -> Vec<RowDescriptor> {
    let (completed, active): (Vec<&ListItem>, Vec<&ListItem>) =
        items.iter().partition(|item| item.is_completed());

    let mut uncategorized = Vec::new();
    let mut groups: HashMap<String, Vec<ItemRow>> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for item in &active {
        let parsed = item.parsed();
        let row = item_row(item, parsed.name, state);
        match parsed.category {
            Some(cat) if cat != UNCATEGORIZED_LABEL => {
                if !groups.contains_key(&cat) {
                    first_seen.push(cat.clone());
                }
                groups.entry(cat).or_default().push(row);
            }
            _ => uncategorized.push(row),
        }
    }

    let mut rows = Vec::new();
    if active.is_empty() && completed.is_empty() {
        rows.push(RowDescriptor::empty());
    }

    if !uncategorized.is_empty() {
        rows.push(RowDescriptor::category(CategoryHeader {
            emoji: UNCATEGORIZED_EMOJI.to_owned(),
            label: UNCATEGORIZED_LABEL.to_owned(),
            offers_bulk_categorize: true,
        }));
        rows.extend(uncategorized.into_iter().map(RowDescriptor::item));
    }

    for cat in ordered_categories(&first_seen, &state.category_order) {
        let Some(members) = groups.remove(&cat) else {
            continue;
        };
        rows.push(RowDescriptor::category(CategoryHeader {
            emoji: category::emoji_for(&cat).to_owned(),
            label: cat,
            offers_bulk_categorize: false,
        }));
        rows.extend(members.into_iter().map(RowDescriptor::item));
    }

    if !completed.is_empty() {
        let done: Vec<ItemRow> = completed
            .iter()
            .map(|item| item_row(item, item.parsed().name, state))
            .collect();
        rows.push(RowDescriptor::completed_header(
            done.len(),
            state.completed_collapsed,
        ));
        rows.push(RowDescriptor::completed_section(
            done,
            state.completed_collapsed,
        ));
    }

    rows.push(RowDescriptor::spacer());
    rows
}

/// Configured categories that are present, then the rest in first-seen order.
fn ordered_categories(first_seen: &[String], order: &[String]) -> Vec<String> {
    let mut ordered: Vec<String> = order
        .iter()
        .filter(|cat| first_seen.contains(cat))
        .cloned()
        .collect();
    ordered.dedup();
    for cat in first_seen {
        if !ordered.contains(cat) {
            ordered.push(cat.clone());
        }
    }
    ordered
}

fn item_row(item: &ListItem, name: String, state: &RenderState) -> ItemRow {
    ItemRow {
        uid: item.uid.clone(),
        name,
        completion: item.completion,
        pending: state.pending.contains(&item.uid),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
