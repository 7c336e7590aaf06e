//! Path-copying updates
//!
//! Replacing a node rebuilds every ancestor on the path from the root down to
//! it; all other subtrees are carried over by reference.

use crate::node::{Node, Tree};
use std::sync::Arc;
use tracing::trace;

/// Replace the node with `id` by `update(node)`
///
/// Only the first pre-order match is replaced. When `id` is absent the input
/// tree is returned as is (same allocation). `update` must keep the node's id.
pub fn update_node_in_tree<F>(tree: &Tree, id: &str, update: F) -> Tree
where
    F: FnOnce(&Node) -> Node,
{
    let mut update = Some(update);
    match rebuild(tree, id, &mut update) {
        Some(updated) => updated,
        None => {
            trace!(node_id = %id, "Update target not found, tree unchanged");
            Arc::clone(tree)
        }
    }
}

fn rebuild<F>(node: &Arc<Node>, id: &str, update: &mut Option<F>) -> Option<Arc<Node>>
where
    F: FnOnce(&Node) -> Node,
{
    if node.id == *id {
        let update = update.take()?;
        return Some(Arc::new(update(node)));
    }

    for (index, child) in node.children.iter().enumerate() {
        if let Some(new_child) = rebuild(child, id, update) {
            let mut children = node.children.clone();
            children[index] = new_child;

            return Some(Arc::new(Node {
                id: node.id.clone(),
                tag: node.tag.clone(),
                children,
                attributes: node.attributes.clone(),
                styles: node.styles.clone(),
            }));
        }
    }

    None
}

/// Shallow-merge `attributes` into the node with `id`
///
/// New keys are added, existing keys overwritten, all others kept.
pub fn merge_attributes<I, K, V>(tree: &Tree, id: &str, attributes: I) -> Tree
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    update_node_in_tree(tree, id, |node| {
        let mut next = node.clone();
        next.attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        next
    })
}

/// Shallow-merge `styles` into the node with `id`
pub fn merge_styles<I, K, V>(tree: &Tree, id: &str, styles: I) -> Tree
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    update_node_in_tree(tree, id, |node| {
        let mut next = node.clone();
        next.styles
            .extend(styles.into_iter().map(|(k, v)| (k.into(), v.into())));
        next
    })
}
