//! Element tree data model

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifier reserved for the root of every tree
pub const ROOT_ID: &str = "root";

/// Attribute rendered in place of a node's children
pub const TEXT_CONTENT_ATTR: &str = "textContent";

/// A whole tree, addressed through its root node
pub type Tree = Arc<Node>;

/// Unique node identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Element in the tree
///
/// Children are reference counted so that edits can share every subtree
/// they do not touch. `PartialEq` compares whole subtrees by value; use
/// [`Arc::ptr_eq`] to check whether two versions share a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub tag: String,
    #[serde(default)]
    pub children: Vec<Arc<Node>>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub styles: HashMap<String, String>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            children: Vec::new(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
        }
    }

    /// Create a node carrying the root sentinel id
    pub fn root(tag: impl Into<String>) -> Self {
        Self::new(ROOT_ID, tag)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children.into_iter().map(Arc::new));
        self
    }

    /// Freeze this node as the root of a tree
    pub fn into_tree(self) -> Tree {
        Arc::new(self)
    }

    /// Position of the direct child with `id`
    pub fn child_index(&self, id: &str) -> Option<usize> {
        self.children.iter().position(|c| c.id == *id)
    }

    pub fn text_content(&self) -> Option<&str> {
        self.attributes.get(TEXT_CONTENT_ATTR).map(String::as_str)
    }

    /// Number of nodes in this subtree, itself included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Levels below this node (a leaf has depth 0)
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Identifiers of this subtree in pre-order
    pub fn ids(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.node_count());
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids(&self, out: &mut Vec<NodeId>) {
        out.push(self.id.clone());
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}
