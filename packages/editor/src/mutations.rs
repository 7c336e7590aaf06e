//! # Tree Mutations
//!
//! The edits a property panel or tree view can request, as plain data.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation names one user-level edit
//! 2. **Validated**: Targets are checked before the tree engine runs
//! 3. **Pure**: Applying a mutation returns a new tree and never touches the old one
//!
//! ## Mutation Semantics
//!
//! ### SetStyles / SetAttributes
//! - Shallow merge, given keys win, other keys kept
//! - Values are stored verbatim
//!
//! ### Wrap
//! - Tag is trimmed and must not be empty
//! - Reports the wrapper id so the caller can select it
//!
//! ### Unwrap
//! - Removes the target's parent; fails when that parent is the root
//!
//! ### Duplicate
//! - Copy gets fresh ids throughout and lands after the original
//!
//! ### Delete
//! - Removes the node and all descendants; the root cannot be deleted

use domedit_tree::{
    duplicate_node_in_tree, find_node_by_id, merge_attributes, merge_styles, remove_node_in_tree,
    unwrap_node_in_tree, wrap_node_in_tree, IdGenerator, NodeId, Tree, TreeError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// User-level edits (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Merge inline style properties
    SetStyles {
        node_id: String,
        styles: HashMap<String, String>,
    },

    /// Merge attribute values
    SetAttributes {
        node_id: String,
        attributes: HashMap<String, String>,
    },

    /// Wrap a node in a new element
    Wrap {
        node_id: String,
        tag: String,
    },

    /// Remove a node's parent, keeping the parent's children
    Unwrap {
        node_id: String,
    },

    /// Insert a copy of a node right after it
    Duplicate {
        node_id: String,
    },

    /// Remove a node from the tree
    Delete {
        node_id: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Wrap tag must not be empty")]
    EmptyTag,

    #[error("Cannot {0} the root node")]
    RootProtected(&'static str),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Outcome of a successful mutation
#[derive(Debug, Clone)]
pub struct Applied {
    pub tree: Tree,

    /// Node created by the edit (wrapper or copy), if any
    pub created: Option<NodeId>,
}

impl Applied {
    fn edited(tree: Tree) -> Self {
        Self {
            tree,
            created: None,
        }
    }
}

impl Mutation {
    pub fn set_style(node_id: impl Into<String>, property: impl Into<String>, value: impl Into<String>) -> Self {
        Mutation::SetStyles {
            node_id: node_id.into(),
            styles: HashMap::from([(property.into(), value.into())]),
        }
    }

    pub fn set_attribute(node_id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Mutation::SetAttributes {
            node_id: node_id.into(),
            attributes: HashMap::from([(name.into(), value.into())]),
        }
    }

    /// Id of the node this mutation targets
    pub fn node_id(&self) -> &str {
        match self {
            Mutation::SetStyles { node_id, .. }
            | Mutation::SetAttributes { node_id, .. }
            | Mutation::Wrap { node_id, .. }
            | Mutation::Unwrap { node_id }
            | Mutation::Duplicate { node_id }
            | Mutation::Delete { node_id } => node_id,
        }
    }

    /// Debug name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetStyles { .. } => "set_styles",
            Mutation::SetAttributes { .. } => "set_attributes",
            Mutation::Wrap { .. } => "wrap",
            Mutation::Unwrap { .. } => "unwrap",
            Mutation::Duplicate { .. } => "duplicate",
            Mutation::Delete { .. } => "delete",
        }
    }

    /// Apply mutation to a tree with validation
    pub fn apply<G>(&self, tree: &Tree, ids: &mut G) -> Result<Applied, MutationError>
    where
        G: IdGenerator + ?Sized,
    {
        self.validate(tree)?;

        match self {
            Mutation::SetStyles { node_id, styles } => {
                Ok(Applied::edited(merge_styles(tree, node_id, styles.clone())))
            }

            Mutation::SetAttributes { node_id, attributes } => {
                Ok(Applied::edited(merge_attributes(tree, node_id, attributes.clone())))
            }

            Mutation::Wrap { node_id, tag } => {
                let wrapped = wrap_node_in_tree(tree, node_id, tag.trim(), ids)?;
                Ok(Applied {
                    tree: wrapped.tree,
                    created: Some(wrapped.wrapper_id),
                })
            }

            Mutation::Unwrap { node_id } => Ok(Applied::edited(unwrap_node_in_tree(tree, node_id)?)),

            Mutation::Duplicate { node_id } => {
                let duplicated = duplicate_node_in_tree(tree, node_id, ids)?;
                Ok(Applied {
                    tree: duplicated.tree,
                    created: Some(duplicated.copy_id),
                })
            }

            Mutation::Delete { node_id } => Ok(Applied::edited(remove_node_in_tree(tree, node_id)?)),
        }
    }

    /// Validate without applying
    pub fn validate(&self, tree: &Tree) -> Result<(), MutationError> {
        let node_id = self.node_id();
        if find_node_by_id(tree, node_id).is_none() {
            return Err(MutationError::NodeNotFound(node_id.to_string()));
        }

        match self {
            Mutation::Wrap { tag, .. } if tag.trim().is_empty() => Err(MutationError::EmptyTag),
            Mutation::Delete { node_id } if tree.id == node_id.as_str() => {
                Err(MutationError::RootProtected("delete"))
            }
            _ => Ok(()),
        }
    }
}

/// Result of applying a mutation to a document
#[derive(Debug, Clone)]
pub struct MutationResult {
    /// New version number
    pub version: u64,

    /// Node created by the edit (wrapper or copy), if any
    pub created: Option<NodeId>,
}
