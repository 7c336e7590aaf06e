//! # DomEdit Tree
//!
//! Immutable element tree and the structural edits the editor performs on it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ search: find node / find parent by id       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ update: path-copying rebuild at an id       │
//! │  - attribute / style merge                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ edits: wrap, unwrap, duplicate, delete      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Trees are values**: every edit returns a new [`Tree`], the input is never touched
//! 2. **Structural sharing**: subtrees off the edited path are shared by reference
//! 3. **Unique ids**: nodes created by an edit get ids from a caller-supplied [`IdGenerator`]
//! 4. **Root protection**: the root is never wrapped, unwrapped, duplicated or deleted
//!
//! ## Usage
//!
//! ```rust
//! use domedit_tree::{wrap_node_in_tree, Node, SequentialIds};
//!
//! let tree = Node::root("div")
//!     .with_child(Node::new("A", "section").with_child(Node::new("B", "p")))
//!     .into_tree();
//!
//! let mut ids = SequentialIds::from_seed("doc");
//! let wrapped = wrap_node_in_tree(&tree, "B", "span", &mut ids).unwrap();
//!
//! let wrapper = wrapped.tree.children[0].children[0].clone();
//! assert_eq!(wrapper.tag, "span");
//! assert_eq!(wrapper.children[0].id, "B");
//! ```

mod edits;
mod errors;
mod id_generator;
mod node;
mod search;
mod update;

pub use edits::{
    copy_node_in_tree, deep_copy_with_fresh_ids, delete_node_in_tree, duplicate_node_in_tree,
    remove_node_in_tree, unwrap_node_in_tree, wrap_node_in_tree, Duplicated, Wrapped,
};
pub use errors::{TreeError, TreeResult};
pub use id_generator::{document_seed, IdGenerator, RandomIds, SequentialIds};
pub use node::{Node, NodeId, Tree, ROOT_ID, TEXT_CONTENT_ATTR};
pub use search::{contains, find_node_by_id, find_parent_by_id};
pub use update::{merge_attributes, merge_styles, update_node_in_tree};
