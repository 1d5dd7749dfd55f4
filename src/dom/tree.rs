//! Tree operations: create, append, move, remove, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The live view tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is O(1).
/// A node keeps its `NodeId` for as long as it lives, including across moves;
/// that id is what "node identity" means for the reconciler.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.create(data);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Create a detached node. It has no parent until it is moved into one.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(
            self.nodes.contains_key(parent),
            "parent node does not exist"
        );
        let id = self.create(data);
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        id
    }

    /// Place `node` under `parent`, immediately before `reference`.
    ///
    /// `reference == None` (or a reference that is not a child of `parent`)
    /// appends. The node is detached from wherever it was first, so this is a
    /// single relocation: the node and its subtree keep their ids and data.
    pub fn move_before(&mut self, parent: NodeId, node: NodeId, reference: Option<NodeId>) {
        debug_assert!(self.nodes.contains_key(node), "node does not exist");
        debug_assert!(self.nodes.contains_key(parent), "parent does not exist");
        if reference == Some(node) {
            return;
        }

        self.detach_from_parent(node);

        self.parent.insert(node, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            let at = reference
                .and_then(|r| siblings.iter().position(|&c| c == r))
                .unwrap_or(siblings.len());
            siblings.insert(at, node);
        }
    }

    /// Remove a node and all its descendants recursively.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't exist.
    /// Calling this twice for the same id is harmless.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        self.detach_from_parent(id);

        if self.root == Some(id) {
            self.root = None;
        }

        // Collect all descendants (BFS) to remove them.
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    fn detach_from_parent(&mut self, node: NodeId) {
        if let Some(old_parent) = self.parent.remove(node) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != node);
            }
        }
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no children
    /// or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the topmost ancestor.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The reconciliation key of a node, if it has one.
    pub fn key(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).and_then(|d| d.key.as_deref())
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div").with_key("root"));
        let a = dom.insert_child(root, NodeData::new("div").with_key("a"));
        let b = dom.insert_child(root, NodeData::new("div").with_key("b"));
        let c = dom.insert_child(a, NodeData::new("button").with_key("c"));
        let d = dom.insert_child(a, NodeData::new("span").with_key("d"));
        (dom, root, a, b, c, d)
    }

    #[test]
    fn insert_sets_root() {
        let mut dom = Dom::new();
        let id = dom.insert(NodeData::new("div"));
        assert_eq!(dom.root(), Some(id));
    }

    #[test]
    fn create_does_not_set_root() {
        let mut dom = Dom::new();
        let id = dom.create(NodeData::new("div"));
        assert_eq!(dom.root(), None);
        assert_eq!(dom.parent(id), None);
    }

    #[test]
    fn insert_child_parent_relationship() {
        let (dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.parent(a), Some(root));
        assert_eq!(dom.parent(c), Some(a));
        assert_eq!(dom.parent(root), None);
    }

    #[test]
    fn children_list() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.children(root), &[a, b]);
        assert_eq!(dom.children(a), &[c, d]);
        assert!(dom.children(c).is_empty());
    }

    #[test]
    fn move_before_reorders_siblings() {
        let (mut dom, _root, a, _b, c, d) = build_tree();
        dom.move_before(a, d, Some(c));
        assert_eq!(dom.children(a), &[d, c]);
        assert_eq!(dom.parent(d), Some(a));
    }

    #[test]
    fn move_before_none_appends() {
        let (mut dom, _root, a, _b, c, d) = build_tree();
        dom.move_before(a, c, None);
        assert_eq!(dom.children(a), &[d, c]);
    }

    #[test]
    fn move_before_attaches_detached_node() {
        let (mut dom, root, a, b, ..) = build_tree();
        let fresh = dom.create(NodeData::new("div"));
        dom.move_before(root, fresh, Some(b));
        assert_eq!(dom.children(root), &[a, fresh, b]);
    }

    #[test]
    fn move_before_self_is_noop() {
        let (mut dom, _root, a, _b, c, d) = build_tree();
        dom.move_before(a, c, Some(c));
        assert_eq!(dom.children(a), &[c, d]);
    }

    #[test]
    fn move_keeps_subtree_and_data() {
        let (mut dom, root, a, b, c, d) = build_tree();
        dom.move_before(root, a, None);
        assert_eq!(dom.children(root), &[b, a]);
        assert_eq!(dom.children(a), &[c, d]);
        assert_eq!(dom.key(a), Some("a"));
    }

    #[test]
    fn ancestors() {
        let (dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.ancestors(c), vec![a, root]);
        assert!(dom.ancestors(root).is_empty());
    }

    #[test]
    fn remove_subtree() {
        let (mut dom, root, a, b, c, d) = build_tree();
        dom.remove(a);
        assert!(!dom.contains(a));
        assert!(!dom.contains(c));
        assert!(!dom.contains(d));
        assert_eq!(dom.children(root), &[b]);
        assert_eq!(dom.len(), 2);
    }

    #[test]
    fn remove_twice_is_harmless() {
        let (mut dom, root, a, b, ..) = build_tree();
        assert!(dom.remove(a).is_some());
        assert!(dom.remove(a).is_none());
        assert_eq!(dom.children(root), &[b]);
    }

    #[test]
    fn remove_root() {
        let (mut dom, root, ..) = build_tree();
        dom.remove(root);
        assert!(dom.is_empty());
        assert_eq!(dom.root(), None);
    }

    #[test]
    fn walk_depth_first() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(dom.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn moved_node_changes_ancestry() {
        let (mut dom, root, a, b, c, _d) = build_tree();
        dom.move_before(b, c, None);
        assert_eq!(dom.parent(c), Some(b));
        assert!(!dom.children(a).contains(&c));
        assert_eq!(dom.ancestors(c), vec![b, root]);
    }
}
