//! The keyed reconciler.
//!
//! One pass over a container: index the keyed children, retire the ones that
//! are no longer wanted, then walk the desired rows in order, patching or
//! creating each and moving it into place. Unkeyed children are never touched
//! and end up after the desired rows.

use std::collections::HashMap;
use std::ops::AddAssign;

use tracing::{debug, trace};

use super::descriptor::{RowDescriptor, RowKind};
use super::LiveTree;
use crate::dom::node::NodeId;
use crate::widgets::factory;

/// What one reconcile pass did, including nested passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// New row nodes built.
    pub created: usize,
    /// Existing rows of a patchable kind updated in place.
    pub patched: usize,
    /// Existing rows relocated within their container.
    pub moved: usize,
    /// Rows taken out of the desired set (detached or mid-removal).
    pub removed: usize,
}

impl ReconcileStats {
    /// No node was created, moved or removed.
    pub fn is_structurally_unchanged(&self) -> bool {
        self.created == 0 && self.moved == 0 && self.removed == 0
    }
}

impl AddAssign for ReconcileStats {
    fn add_assign(&mut self, rhs: Self) {
        self.created += rhs.created;
        self.patched += rhs.patched;
        self.moved += rhs.moved;
        self.removed += rhs.removed;
    }
}

/// Make the keyed children of `container` match `desired`, in order.
///
/// Calling this twice with the same rows is a structural no-op the second
/// time. Nodes whose key survives keep their id; nodes whose key is gone are
/// handed to [`LiveTree::begin_removal`].
///
/// # Panics
///
/// Panics (debug) if `desired` contains the same key twice.
pub fn reconcile(
    tree: &mut LiveTree,
    container: NodeId,
    desired: &[RowDescriptor],
) -> ReconcileStats {
    let mut stats = ReconcileStats::default();

    let wanted: HashMap<&str, RowKind> = desired
        .iter()
        .map(|row| (row.key.as_str(), row.kind()))
        .collect();
    debug_assert_eq!(
        wanted.len(),
        desired.len(),
        "duplicate key in desired rows"
    );

    // Index the keyed children. A key that is no longer wanted, or now names
    // a row of another kind, is stale.
    let mut existing: HashMap<String, NodeId> = HashMap::new();
    let mut stale = Vec::new();
    for &child in tree.dom().children(container) {
        let Some(key) = tree.dom().key(child) else {
            continue;
        };
        let keep = wanted
            .get(key)
            .is_some_and(|&kind| tree.kind(child) == Some(kind));
        if keep && !existing.contains_key(key) {
            existing.insert(key.to_owned(), child);
        } else {
            stale.push(child);
        }
    }

    for node in stale {
        tree.begin_removal(node);
        stats.removed += 1;
    }

    for (position, row) in desired.iter().enumerate() {
        let (node, fresh) = match existing.remove(row.key.as_str()) {
            Some(node) => {
                stats += factory::patch(tree, node, row);
                (node, false)
            }
            None => {
                let (node, nested) = factory::create(tree, row);
                stats += nested;
                stats.created += 1;
                (node, true)
            }
        };

        let occupant = tree.dom().children(container).get(position).copied();
        if occupant != Some(node) {
            tree.dom_mut().move_before(container, node, occupant);
            if !fresh {
                stats.moved += 1;
                tree.lifecycle_mut().on_move(node);
                trace!(key = %row.key, position, "moved");
            }
        }
    }

    debug!(
        ?container,
        rows = desired.len(),
        created = stats.created,
        patched = stats.patched,
        moved = stats.moved,
        removed = stats.removed,
        "reconciled"
    );
    stats
}

// ===========================================================================
// Tests
// ===========================================================================
