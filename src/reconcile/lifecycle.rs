//! Row lifecycle: create, patch, move, removing, detach.
//!
//! The `LifecycleTracker` records which row nodes are currently live and
//! accumulates lifecycle events that the host drains after each pass (to start
//! an enter animation on `Created`, or a fade-out on `Removing`).

use std::collections::HashSet;

use crate::dom::node::NodeId;

// ---------------------------------------------------------------------------
// LifecycleEvent
// ---------------------------------------------------------------------------

/// Events that occur during a row node's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A new row node was constructed and inserted.
    Created { node_id: NodeId },
    /// An existing row node had its mutable fields updated.
    Patched { node_id: NodeId },
    /// An existing row node was relocated within its container.
    Moved { node_id: NodeId },
    /// A row node started its removal transition. It is still in the tree.
    Removing { node_id: NodeId },
    /// A row node left the tree for good.
    Detached { node_id: NodeId },
}

// ---------------------------------------------------------------------------
// LifecycleTracker
// ---------------------------------------------------------------------------

/// Tracks which row nodes are live and accumulates lifecycle events.
#[derive(Debug)]
pub struct LifecycleTracker {
    /// Row nodes currently in the tree (including ones mid-removal).
    live: HashSet<NodeId>,
    /// Pending lifecycle events, in order of occurrence.
    pending: Vec<LifecycleEvent>,
}

impl LifecycleTracker {
    /// Create a new, empty lifecycle tracker.
    pub fn new() -> Self {
        Self {
            live: HashSet::new(),
            pending: Vec::new(),
        }
    }

    /// Record that a row node was created.
    ///
    /// If the node was already live, this is a no-op (no duplicate event).
    pub fn on_create(&mut self, id: NodeId) {
        if self.live.insert(id) {
            self.pending.push(LifecycleEvent::Created { node_id: id });
        }
    }

    /// Record that a live row node was patched.
    pub fn on_patch(&mut self, id: NodeId) {
        if self.live.contains(&id) {
            self.pending.push(LifecycleEvent::Patched { node_id: id });
        }
    }

    /// Record that a live row node was relocated.
    pub fn on_move(&mut self, id: NodeId) {
        if self.live.contains(&id) {
            self.pending.push(LifecycleEvent::Moved { node_id: id });
        }
    }

    /// Record that a live row node began its removal transition.
    pub fn on_removing(&mut self, id: NodeId) {
        if self.live.contains(&id) {
            self.pending.push(LifecycleEvent::Removing { node_id: id });
        }
    }

    /// Record that a row node was detached.
    ///
    /// If the node was not live, this is a no-op (no spurious event), which is
    /// what makes a second detach of the same node silent.
    pub fn on_detach(&mut self, id: NodeId) {
        if self.live.remove(&id) {
            self.pending.push(LifecycleEvent::Detached { node_id: id });
        }
    }

    /// Check whether a row node is live.
    pub fn is_live(&self, id: NodeId) -> bool {
        self.live.contains(&id)
    }

    /// The number of live row nodes.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Drain and return all pending lifecycle events.
    pub fn pending_events(&mut self) -> Vec<LifecycleEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Whether there are any pending events.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Clear all state (live nodes and pending events).
    pub fn clear(&mut self) {
        self.live.clear();
        self.pending.clear();
    }
}

impl Default for LifecycleTracker {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
