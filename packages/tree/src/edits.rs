//! # Structural Edits
//!
//! Wrap, unwrap, duplicate and delete, each built from a parent lookup plus
//! a single [`update_node_in_tree`] call on the node whose children change.
//!
//! ## Edit Semantics
//!
//! ### Wrap
//! - Inserts a fresh, empty node between the target and its parent
//! - The wrapper takes the target's position; the target becomes its only child
//! - Fails on the root (nothing to wrap it into)
//!
//! ### Unwrap
//! - Removes the target's *parent*, splicing its children into the grandparent
//! - Fails on the root, and when the parent is the root
//!
//! ### Duplicate
//! - Deep copy with fresh ids for the copy and every descendant
//! - Copy lands directly after the original
//!
//! ### Delete
//! - Removes the target and its whole subtree
//!
//! Every id handed to a new node is absent from the tree being edited;
//! ids the generator offers that the tree already holds are skipped.
//!
//! Duplicate and delete come in two flavours: the strict `*_node_in_tree`
//! functions returning [`TreeResult`], and lenient ones that hand back the
//! input tree when there is nothing to do.

use crate::errors::{TreeError, TreeResult};
use crate::id_generator::IdGenerator;
use crate::node::{Node, NodeId, Tree};
use crate::search::{contains, find_parent_by_id};
use crate::update::update_node_in_tree;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Result of a successful wrap
#[derive(Debug, Clone)]
pub struct Wrapped {
    pub tree: Tree,
    /// Id of the newly inserted wrapper node
    pub wrapper_id: NodeId,
}

/// Result of a successful duplicate
#[derive(Debug, Clone)]
pub struct Duplicated {
    pub tree: Tree,
    /// Id of the root of the copied subtree
    pub copy_id: NodeId,
}

/// Wrap the node with `element_id` in a new `new_tag` node
pub fn wrap_node_in_tree<G>(
    tree: &Tree,
    element_id: &str,
    new_tag: &str,
    ids: &mut G,
) -> TreeResult<Wrapped>
where
    G: IdGenerator + ?Sized,
{
    let parent = locate_parent(tree, element_id)?;

    let mut wrapper_id = None;
    let children = parent
        .children
        .iter()
        .map(|child| {
            if child.id != *element_id {
                return Arc::clone(child);
            }

            let id = fresh_id(tree, ids);
            wrapper_id.get_or_insert_with(|| id.clone());
            Arc::new(Node {
                id,
                tag: new_tag.to_string(),
                children: vec![Arc::clone(child)],
                attributes: HashMap::new(),
                styles: HashMap::new(),
            })
        })
        .collect();

    let wrapper_id = wrapper_id.ok_or_else(|| TreeError::NodeNotFound(element_id.to_string()))?;
    debug!(node_id = %element_id, wrapper_id = %wrapper_id, tag = %new_tag, "Wrapped node");

    Ok(Wrapped {
        tree: replace_children(tree, &parent.id, children),
        wrapper_id,
    })
}

/// Remove the parent of `element_id`, moving its children up one level
///
/// The parent's children take the parent's slot in the grandparent, in
/// their original order. A node directly under the root cannot be
/// unwrapped since that would remove the root.
pub fn unwrap_node_in_tree(tree: &Tree, element_id: &str) -> TreeResult<Tree> {
    let parent = locate_parent(tree, element_id)?;

    let grandparent = find_parent_by_id(tree, parent.id.as_str()).ok_or_else(|| {
        debug!(node_id = %element_id, "Unwrap rejected, parent is the root");
        TreeError::ParentIsRoot(element_id.to_string())
    })?;

    let index = grandparent
        .child_index(parent.id.as_str())
        .ok_or_else(|| TreeError::NodeNotFound(parent.id.to_string()))?;

    let mut children =
        Vec::with_capacity(grandparent.children.len() + parent.children.len() - 1);
    children.extend(grandparent.children[..index].iter().cloned());
    children.extend(parent.children.iter().cloned());
    children.extend(grandparent.children[index + 1..].iter().cloned());

    debug!(node_id = %element_id, removed = %parent.id, "Unwrapped node");
    Ok(replace_children(tree, &grandparent.id, children))
}

/// Copy `node` and its whole subtree, giving every copied node a fresh id
///
/// Ids are drawn in pre-order: the copy's root first, then each descendant.
/// None of them occurs in `tree`, the tree the copy is headed for.
pub fn deep_copy_with_fresh_ids<G>(tree: &Node, node: &Node, ids: &mut G) -> Node
where
    G: IdGenerator + ?Sized,
{
    let id = fresh_id(tree, ids);
    let children = node
        .children
        .iter()
        .map(|child| Arc::new(deep_copy_with_fresh_ids(tree, child, ids)))
        .collect();

    Node {
        id,
        tag: node.tag.clone(),
        children,
        attributes: node.attributes.clone(),
        styles: node.styles.clone(),
    }
}

/// Insert a deep copy of `element_id` directly after it
pub fn duplicate_node_in_tree<G>(tree: &Tree, element_id: &str, ids: &mut G) -> TreeResult<Duplicated>
where
    G: IdGenerator + ?Sized,
{
    let parent = locate_parent(tree, element_id)?;
    let index = parent
        .child_index(element_id)
        .ok_or_else(|| TreeError::NodeNotFound(element_id.to_string()))?;

    let copy = deep_copy_with_fresh_ids(tree, &parent.children[index], ids);
    let copy_id = copy.id.clone();

    let mut children = parent.children.clone();
    children.insert(index + 1, Arc::new(copy));

    debug!(node_id = %element_id, copy_id = %copy_id, "Duplicated node");
    Ok(Duplicated {
        tree: replace_children(tree, &parent.id, children),
        copy_id,
    })
}

/// Like [`duplicate_node_in_tree`], but returns `tree` unchanged on failure
pub fn copy_node_in_tree<G>(tree: &Tree, element_id: &str, ids: &mut G) -> Tree
where
    G: IdGenerator + ?Sized,
{
    match duplicate_node_in_tree(tree, element_id, ids) {
        Ok(duplicated) => duplicated.tree,
        Err(err) => {
            debug!(error = %err, "Duplicate skipped");
            Arc::clone(tree)
        }
    }
}

/// Remove `element_id` and its subtree from its parent
pub fn remove_node_in_tree(tree: &Tree, element_id: &str) -> TreeResult<Tree> {
    let parent = locate_parent(tree, element_id)?;

    let children = parent
        .children
        .iter()
        .filter(|child| child.id != *element_id)
        .cloned()
        .collect();

    debug!(node_id = %element_id, parent_id = %parent.id, "Removed node");
    Ok(replace_children(tree, &parent.id, children))
}

/// Like [`remove_node_in_tree`], but returns `tree` unchanged on failure
pub fn delete_node_in_tree(tree: &Tree, element_id: &str) -> Tree {
    match remove_node_in_tree(tree, element_id) {
        Ok(tree) => tree,
        Err(err) => {
            debug!(error = %err, "Delete skipped");
            Arc::clone(tree)
        }
    }
}

/// Next generated id not already used in `tree`
///
/// The generator must eventually offer an unused id; both built-in
/// generators do.
fn fresh_id<G>(tree: &Node, ids: &mut G) -> NodeId
where
    G: IdGenerator + ?Sized,
{
    loop {
        let id = ids.next_id();
        if !contains(tree, id.as_str()) {
            return id;
        }
        trace!(id = %id, "Skipping generated id already in tree");
    }
}

/// Parent of `element_id`, telling the root apart from a missing id
fn locate_parent<'a>(tree: &'a Tree, element_id: &str) -> TreeResult<&'a Node> {
    if tree.id == *element_id {
        debug!(node_id = %element_id, "Edit rejected on root node");
        return Err(TreeError::RootNode(element_id.to_string()));
    }

    find_parent_by_id(tree, element_id).ok_or_else(|| {
        debug!(node_id = %element_id, "Edit target not found");
        TreeError::NodeNotFound(element_id.to_string())
    })
}

fn replace_children(tree: &Tree, parent_id: &NodeId, children: Vec<Arc<Node>>) -> Tree {
    update_node_in_tree(tree, parent_id.as_str(), move |node| Node {
        id: node.id.clone(),
        tag: node.tag.clone(),
        children,
        attributes: node.attributes.clone(),
        styles: node.styles.clone(),
    })
}
