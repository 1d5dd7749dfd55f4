//! Keyed reconciliation of row descriptors into the live view tree.
//!
//! [`LiveTree`] owns the node arena together with everything the reconciler
//! and the node factory attach to nodes: the row kind of each row node, the
//! per-row mutable record, the bound control actions, the pending removals and
//! the lifecycle log. Nothing else writes to the tree.

pub mod descriptor;
pub mod keyed;
pub mod lifecycle;
pub mod removal;

pub use descriptor::{CategoryHeader, ItemRow, Row, RowDescriptor, RowKey, RowKind};
pub use keyed::{reconcile, ReconcileStats};
pub use lifecycle::{LifecycleEvent, LifecycleTracker};
pub use removal::{RemovalQueue, REMOVAL_FALLBACK};

use slotmap::SecondaryMap;
use tokio::time::Instant;
use tracing::trace;

use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;
use crate::event::action::{Action, Envelope};
use crate::event::handler::HandlerTable;
use crate::model::Completion;

/// Class carried by a row while its removal transition runs.
pub const REMOVING_CLASS: &str = "removing";

/// Mutable per-row state read by control actions when they fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    pub uid: String,
    pub completion: Completion,
}

/// The live view tree plus its side tables.
#[derive(Default)]
pub struct LiveTree {
    dom: Dom,
    kinds: SecondaryMap<NodeId, RowKind>,
    records: SecondaryMap<NodeId, RowRecord>,
    handlers: HandlerTable,
    removals: RemovalQueue,
    lifecycle: LifecycleTracker,
}

impl LiveTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// Insert the root node of the tree.
    pub fn insert_root(&mut self, data: NodeData) -> NodeId {
        let root = self.dom.insert(data);
        self.dom.set_root(root);
        root
    }

    // ── Row bookkeeping ──────────────────────────────────────────────

    /// Mark a freshly created node as a row of `kind`.
    pub fn register_row(&mut self, node: NodeId, kind: RowKind) {
        self.kinds.insert(node, kind);
        self.lifecycle.on_create(node);
    }

    /// Row kind of `node`, if it is a row.
    pub fn kind(&self, node: NodeId) -> Option<RowKind> {
        self.kinds.get(node).copied()
    }

    pub fn record(&self, node: NodeId) -> Option<&RowRecord> {
        self.records.get(node)
    }

    /// Store the record for an item row. Returns `true` if it changed.
    pub fn set_record(&mut self, node: NodeId, record: RowRecord) -> bool {
        if self.records.get(node) == Some(&record) {
            return false;
        }
        self.records.insert(node, record);
        true
    }

    pub fn lifecycle(&self) -> &LifecycleTracker {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut LifecycleTracker {
        &mut self.lifecycle
    }

    // ── Controls ─────────────────────────────────────────────────────

    /// Bind `action` to the control `node`.
    pub fn bind(&mut self, node: NodeId, action: Action) {
        self.handlers.bind(node, action);
    }

    pub fn action(&self, node: NodeId) -> Option<Action> {
        self.handlers.get(node)
    }

    /// Resolve a click on `node` to the nearest bound action.
    pub fn resolve_click(&self, node: NodeId) -> Option<Envelope> {
        self.handlers.resolve(&self.dom, node)
    }

    // ── Removal ──────────────────────────────────────────────────────

    /// Take `node` out of the desired set.
    ///
    /// Rows whose kind animates removal lose their key and controls at once,
    /// get the removing class and stay in the tree until [`animation_end`] or
    /// the fallback deadline. Everything else is detached immediately.
    ///
    /// [`animation_end`]: Self::animation_end
    pub fn begin_removal(&mut self, node: NodeId) {
        let animates = self.kind(node).is_some_and(RowKind::animates_removal);
        if !animates {
            self.detach(node);
            return;
        }
        if self.removals.contains(node) {
            return;
        }

        if let Some(data) = self.dom.get_mut(node) {
            data.key = None;
            data.add_class(REMOVING_CLASS);
        }
        for id in self.dom.walk_depth_first(node) {
            self.handlers.unbind(id);
        }
        self.removals
            .schedule(node, Instant::now() + REMOVAL_FALLBACK);
        self.lifecycle.on_removing(node);
        trace!(?node, "row removal started");
    }

    /// The host reports that `node`'s removal transition finished.
    ///
    /// Returns `true` if this detached the node. Animation-end on a node that
    /// is not mid-removal, or was already detached, does nothing.
    pub fn animation_end(&mut self, node: NodeId) -> bool {
        if !self.removals.contains(node) {
            return false;
        }
        self.detach(node)
    }

    /// Detach every removing row whose fallback deadline is at or before `now`.
    pub fn sweep_removals(&mut self, now: Instant) -> usize {
        self.removals
            .take_due(now)
            .into_iter()
            .filter(|&node| self.detach(node))
            .count()
    }

    /// Earliest fallback deadline among removing rows.
    pub fn next_removal_deadline(&self) -> Option<Instant> {
        self.removals.next_deadline()
    }

    pub fn is_removing(&self, node: NodeId) -> bool {
        self.removals.contains(node)
    }

    pub fn pending_removals(&self) -> usize {
        self.removals.len()
    }

    /// Remove `node` and its subtree from the tree and every side table.
    ///
    /// Safe to call any number of times: returns `true` only for the call that
    /// actually detached the node.
    pub fn detach(&mut self, node: NodeId) -> bool {
        if !self.dom.contains(node) {
            return false;
        }
        for id in self.dom.walk_depth_first(node) {
            self.kinds.remove(id);
            self.records.remove(id);
            self.handlers.unbind(id);
            self.removals.forget(id);
            self.lifecycle.on_detach(id);
        }
        self.dom.remove(node);
        trace!(?node, "detached");
        true
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_row(kind: RowKind) -> (LiveTree, NodeId, NodeId, NodeId) {
        let mut tree = LiveTree::new();
        let list = tree.insert_root(NodeData::new("div"));
        let row = tree
            .dom_mut()
            .insert_child(list, NodeData::new("div").with_key("item:1"));
        let button = tree
            .dom_mut()
            .insert_child(row, NodeData::new("button").with_class("checkbox"));
        tree.register_row(row, kind);
        tree.bind(button, Action::ToggleItem { row });
        tree.set_record(
            row,
            RowRecord {
                uid: "1".into(),
                completion: Completion::Active,
            },
        );
        (tree, list, row, button)
    }

    #[test]
    fn item_removal_clears_key_and_controls() {
        let (mut tree, list, row, button) = tree_with_row(RowKind::Item);
        tree.begin_removal(row);

        assert!(tree.dom().contains(row));
        assert_eq!(tree.dom().key(row), None);
        assert!(tree.dom().get(row).unwrap().has_class(REMOVING_CLASS));
        assert!(tree.action(button).is_none());
        assert!(tree.dom().child_keys(list).is_empty());
        assert!(tree.is_removing(row));
    }

    #[test]
    fn static_row_detaches_immediately() {
        let (mut tree, list, row, _) = tree_with_row(RowKind::CategoryHeader);
        tree.begin_removal(row);
        assert!(!tree.dom().contains(row));
        assert!(tree.dom().children(list).is_empty());
        assert_eq!(tree.pending_removals(), 0);
    }

    #[test]
    fn animation_end_detaches_once() {
        let (mut tree, _list, row, button) = tree_with_row(RowKind::Item);
        tree.begin_removal(row);
        assert!(tree.animation_end(row));
        assert!(!tree.animation_end(row));
        assert!(!tree.dom().contains(button));
        assert!(tree.record(row).is_none());
        assert_eq!(tree.sweep_removals(Instant::now() + REMOVAL_FALLBACK), 0);
    }

    #[test]
    fn animation_end_on_live_row_is_ignored() {
        let (mut tree, _list, row, _) = tree_with_row(RowKind::Item);
        assert!(!tree.animation_end(row));
        assert!(tree.dom().contains(row));
    }

    #[test]
    fn sweep_detaches_after_fallback() {
        let (mut tree, _list, row, _) = tree_with_row(RowKind::Item);
        tree.begin_removal(row);
        let deadline = tree.next_removal_deadline().unwrap();
        assert_eq!(tree.sweep_removals(deadline - REMOVAL_FALLBACK / 2), 0);
        assert_eq!(tree.sweep_removals(deadline), 1);
        assert!(!tree.dom().contains(row));
        assert!(tree.next_removal_deadline().is_none());
    }

    #[test]
    fn detach_twice_is_safe() {
        let (mut tree, _list, row, _) = tree_with_row(RowKind::Item);
        assert!(tree.detach(row));
        assert!(!tree.detach(row));
        assert!(!tree.lifecycle().is_live(row));
    }

    #[test]
    fn lifecycle_sees_removing_then_detached() {
        let (mut tree, _list, row, _) = tree_with_row(RowKind::Item);
        let _ = tree.lifecycle_mut().pending_events();
        tree.begin_removal(row);
        tree.animation_end(row);
        assert_eq!(
            tree.lifecycle_mut().pending_events(),
            vec![
                LifecycleEvent::Removing { node_id: row },
                LifecycleEvent::Detached { node_id: row },
            ]
        );
    }

    #[test]
    fn set_record_reports_change() {
        let (mut tree, _list, row, _) = tree_with_row(RowKind::Item);
        let same = RowRecord {
            uid: "1".into(),
            completion: Completion::Active,
        };
        assert!(!tree.set_record(row, same));
        let flipped = RowRecord {
            uid: "1".into(),
            completion: Completion::Completed,
        };
        assert!(tree.set_record(row, flipped));
        assert_eq!(tree.record(row).unwrap().completion, Completion::Completed);
    }
}
