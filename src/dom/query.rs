//! Tree queries: by key, by class, scoped to a subtree or a container.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// Find the direct child of `container` carrying `key`.
    pub fn child_by_key(&self, container: NodeId, key: &str) -> Option<NodeId> {
        self.children(container)
            .iter()
            .copied()
            .find(|&child| self.key(child) == Some(key))
    }

    /// Keys of the keyed direct children of `container`, in order.
    ///
    /// Unkeyed children (including rows mid-removal) are skipped.
    pub fn child_keys(&self, container: NodeId) -> Vec<String> {
        self.children(container)
            .iter()
            .filter_map(|&child| self.key(child).map(str::to_owned))
            .collect()
    }

    /// First node in the subtree under `start` (excluding `start`) with `class`.
    ///
    /// Depth-first, document order.
    pub fn find_by_class(&self, start: NodeId, class: &str) -> Option<NodeId> {
        self.walk_depth_first(start)
            .into_iter()
            .skip(1)
            .find(|&id| self.get(id).is_some_and(|d| d.has_class(class)))
    }

    /// Find all nodes in the arena that have the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// Find all nodes matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Iterate over all `(NodeId, &NodeData)` pairs in the arena.
    ///
    /// Slotmap order: deterministic but not tree-order.
    fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::node::{NodeData, NodeId};
    use crate::dom::tree::Dom;

    /// ```text
    ///   list
    ///   ├── row (key item:1) > [button.checkbox, span.name]
    ///   ├── row (no key, .removing)
    ///   └── row (key item:2) > [button.checkbox.checked]
    /// ```
    fn build_query_tree() -> (Dom, Ids) {
        let mut dom = Dom::new();
        let list = dom.insert(NodeData::new("div"));
        let r1 = dom.insert_child(list, NodeData::new("div").with_key("item:1"));
        let cb1 = dom.insert_child(r1, NodeData::new("button").with_class("checkbox"));
        let _n1 = dom.insert_child(r1, NodeData::new("span").with_class("name"));
        let _gone = dom.insert_child(list, NodeData::new("div").with_class("removing"));
        let r2 = dom.insert_child(list, NodeData::new("div").with_key("item:2"));
        let cb2 = dom.insert_child(
            r2,
            NodeData::new("button").with_class("checkbox").with_class("checked"),
        );
        (dom, Ids { list, r1, cb1, r2, cb2 })
    }

    struct Ids {
        list: NodeId,
        r1: NodeId,
        cb1: NodeId,
        r2: NodeId,
        cb2: NodeId,
    }

    #[test]
    fn child_by_key_found() {
        let (dom, ids) = build_query_tree();
        assert_eq!(dom.child_by_key(ids.list, "item:2"), Some(ids.r2));
        assert!(dom.child_by_key(ids.list, "item:9").is_none());
    }

    #[test]
    fn child_keys_skip_unkeyed() {
        let (dom, ids) = build_query_tree();
        assert_eq!(dom.child_keys(ids.list), vec!["item:1", "item:2"]);
    }

    #[test]
    fn find_by_class_is_scoped() {
        let (dom, ids) = build_query_tree();
        assert_eq!(dom.find_by_class(ids.r1, "checkbox"), Some(ids.cb1));
        assert_eq!(dom.find_by_class(ids.r2, "checkbox"), Some(ids.cb2));
        assert!(dom.find_by_class(ids.r1, "checked").is_none());
    }

    #[test]
    fn find_by_class_excludes_start() {
        let (dom, ids) = build_query_tree();
        assert!(dom.find_by_class(ids.cb2, "checkbox").is_none());
    }

    #[test]
    fn query_by_class_arena_wide() {
        let (dom, _) = build_query_tree();
        assert_eq!(dom.query_by_class("checkbox").len(), 2);
        assert_eq!(dom.query_by_class("removing").len(), 1);
    }

    #[test]
    fn query_on_empty_dom() {
        let dom = Dom::new();
        assert!(dom.query_by_class("x").is_empty());
        assert!(dom.query_all(|_| true).is_empty());
    }
}
