//! Event dispatch: handler table, action queue and bubble path computation.
//!
//! [`HandlerTable`] maps control nodes to their [`Action`]. A click is resolved
//! by walking [`EventDispatcher::bubble_path`] from the clicked node towards the
//! root and taking the first bound handler, so a control nested inside another
//! clickable element shadows it. The resolved [`Envelope`] is queued on the
//! [`EventDispatcher`] and drained by the card.

use std::collections::VecDeque;

use slotmap::SecondaryMap;

use super::action::{Action, Envelope};
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

// ---------------------------------------------------------------------------
// HandlerTable
// ---------------------------------------------------------------------------

/// Node id -> bound action.
#[derive(Debug, Default)]
pub struct HandlerTable {
    actions: SecondaryMap<NodeId, Action>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `action` to `node`, replacing any previous binding.
    pub fn bind(&mut self, node: NodeId, action: Action) {
        self.actions.insert(node, action);
    }

    /// Drop the binding for `node`, if any.
    pub fn unbind(&mut self, node: NodeId) -> Option<Action> {
        self.actions.remove(node)
    }

    pub fn get(&self, node: NodeId) -> Option<Action> {
        self.actions.get(node).copied()
    }

    /// Resolve a click on `start` to the first bound handler on its bubble path.
    pub fn resolve(&self, dom: &Dom, start: NodeId) -> Option<Envelope> {
        EventDispatcher::bubble_path(dom, start)
            .into_iter()
            .find_map(|node| self.get(node).map(|action| Envelope::new(action, start, node)))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// EventDispatcher
// ---------------------------------------------------------------------------

/// Queue-based event dispatcher.
///
/// Envelopes are enqueued via `push` and drained for processing via `drain`.
#[derive(Debug)]
pub struct EventDispatcher {
    queue: VecDeque<Envelope>,
}

impl EventDispatcher {
    /// Create a new, empty dispatcher.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue an envelope for later processing.
    pub fn push(&mut self, envelope: Envelope) {
        self.queue.push_back(envelope);
    }

    /// Drain all pending envelopes and return them as a `Vec`.
    ///
    /// The queue is empty after this call.
    pub fn drain(&mut self) -> Vec<Envelope> {
        self.queue.drain(..).collect()
    }

    /// Number of pending envelopes.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Compute the bubble path from `start` up to the root (inclusive).
    ///
    /// Returns `[start, parent, grandparent, ..., root]`.
    /// If `start` does not exist in the DOM, returns an empty vec.
    pub fn bubble_path(dom: &Dom, start: NodeId) -> Vec<NodeId> {
        if !dom.contains(start) {
            return Vec::new();
        }
        let mut path = vec![start];
        let ancestors = dom.ancestors(start);
        path.extend(ancestors);
        path
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///  header    row
    ///   / \        \
    /// lbl  clear    checkbox
    /// ```
    struct Tree {
        dom: Dom,
        root: NodeId,
        header: NodeId,
        label: NodeId,
        clear: NodeId,
        row: NodeId,
        checkbox: NodeId,
    }

    fn build_tree() -> Tree {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        let header = dom.insert_child(root, NodeData::new("div"));
        let label = dom.insert_child(header, NodeData::new("span"));
        let clear = dom.insert_child(header, NodeData::new("button"));
        let row = dom.insert_child(root, NodeData::new("div"));
        let checkbox = dom.insert_child(row, NodeData::new("button"));
        Tree {
            dom,
            root,
            header,
            label,
            clear,
            row,
            checkbox,
        }
    }

    // ── Handler resolution ───────────────────────────────────────────

    #[test]
    fn resolve_bubbles_to_ancestor() {
        let t = build_tree();
        let mut table = HandlerTable::new();
        table.bind(t.header, Action::ToggleCompletedSection);

        let env = table.resolve(&t.dom, t.label).unwrap();
        assert_eq!(env.action, Action::ToggleCompletedSection);
        assert_eq!(env.sender, t.label);
        assert_eq!(env.handler, t.header);
    }

    #[test]
    fn nested_control_shadows_ancestor() {
        let t = build_tree();
        let mut table = HandlerTable::new();
        table.bind(t.header, Action::ToggleCompletedSection);
        table.bind(t.clear, Action::ClearCompleted);

        let env = table.resolve(&t.dom, t.clear).unwrap();
        assert_eq!(env.action, Action::ClearCompleted);
        assert!(!env.bubbled());
    }

    #[test]
    fn resolve_without_handler() {
        let t = build_tree();
        let table = HandlerTable::new();
        assert!(table.resolve(&t.dom, t.checkbox).is_none());
    }

    #[test]
    fn rebind_replaces_action() {
        let t = build_tree();
        let mut table = HandlerTable::new();
        table.bind(t.checkbox, Action::ToggleItem { row: t.row });
        table.bind(t.checkbox, Action::RemoveItem { row: t.row });
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(t.checkbox), Some(Action::RemoveItem { row: t.row }));
        assert!(table.unbind(t.checkbox).is_some());
        assert!(table.is_empty());
    }

    // ── Push / Drain ─────────────────────────────────────────────────

    #[test]
    fn push_preserves_order() {
        let t = build_tree();
        let mut disp = EventDispatcher::new();
        disp.push(Envelope::new(Action::TriggerSort, t.root, t.root));
        disp.push(Envelope::new(Action::ToggleAutoSort, t.root, t.root));

        assert_eq!(disp.pending_count(), 2);
        let envelopes = disp.drain();
        assert_eq!(envelopes[0].action, Action::TriggerSort);
        assert_eq!(envelopes[1].action, Action::ToggleAutoSort);
        assert!(disp.is_empty());
    }

    #[test]
    fn drain_empty() {
        let mut disp = EventDispatcher::default();
        assert!(disp.drain().is_empty());
    }

    // ── Bubble path ──────────────────────────────────────────────────

    #[test]
    fn bubble_path_from_leaf() {
        let t = build_tree();
        let path = EventDispatcher::bubble_path(&t.dom, t.checkbox);
        assert_eq!(path, vec![t.checkbox, t.row, t.root]);
    }

    #[test]
    fn bubble_path_from_root() {
        let t = build_tree();
        assert_eq!(EventDispatcher::bubble_path(&t.dom, t.root), vec![t.root]);
    }

    #[test]
    fn bubble_path_nonexistent_node() {
        let mut t = build_tree();
        // Create and remove a node to get a stale id.
        let stale = t.dom.insert(NodeData::new("div"));
        t.dom.remove(stale);
        assert!(EventDispatcher::bubble_path(&t.dom, stale).is_empty());
    }
}
