//! Depth-first lookups by node id

use crate::node::Node;

/// Find the node with `id`, checking each node before its children
///
/// Returns the first pre-order match.
pub fn find_node_by_id<'a>(node: &'a Node, id: &str) -> Option<&'a Node> {
    if node.id == *id {
        return Some(node);
    }

    node.children
        .iter()
        .find_map(|child| find_node_by_id(child, id))
}

/// Find the node whose direct children include `id`
///
/// The root has no parent, so its own id yields `None`.
pub fn find_parent_by_id<'a>(node: &'a Node, id: &str) -> Option<&'a Node> {
    for child in &node.children {
        if child.id == *id {
            return Some(node);
        }

        if let Some(parent) = find_parent_by_id(child, id) {
            return Some(parent);
        }
    }

    None
}

pub fn contains(node: &Node, id: &str) -> bool {
    find_node_by_id(node, id).is_some()
}
