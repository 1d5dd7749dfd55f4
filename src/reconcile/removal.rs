//! Pending row removals and their fallback deadlines.
//!
//! A removed item row stays in the tree while it fades out. Two triggers race
//! to detach it: the host's animation-end notification and the deadline kept
//! here. Whichever fires first wins; the other finds nothing left to do.

use std::time::Duration;

use tokio::time::Instant;

use crate::dom::node::NodeId;

/// How long a removing row may linger if no animation-end event arrives.
pub const REMOVAL_FALLBACK: Duration = Duration::from_millis(300);

/// Rows mid-removal, each with the instant it must be detached by.
#[derive(Debug, Default)]
pub struct RemovalQueue {
    pending: Vec<(NodeId, Instant)>,
}

impl RemovalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `node` to be detached at `deadline`.
    ///
    /// Rescheduling an already pending node keeps the earlier deadline.
    pub fn schedule(&mut self, node: NodeId, deadline: Instant) {
        if self.contains(node) {
            return;
        }
        self.pending.push((node, deadline));
    }

    /// Remove and return every node whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<NodeId> {
        let mut due = Vec::new();
        self.pending.retain(|&(node, deadline)| {
            if deadline <= now {
                due.push(node);
                false
            } else {
                true
            }
        });
        due
    }

    /// Drop `node` from the queue. Returns `true` if it was pending.
    pub fn forget(&mut self, node: NodeId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|&(n, _)| n != node);
        self.pending.len() != before
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.pending.iter().any(|&(n, _)| n == node)
    }

    /// The earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
