//! # Document Handle
//!
//! Holds the current tree of one document and serializes edits to it.
//!
//! Every edit goes through [`Document::apply`], which swaps in the tree the
//! mutation produced. Older trees stay valid for anyone still holding them.
//!
//! ## Lifecycle
//!
//! ```text
//! Create → Mutate → Mutate → ...
//!   ↓        ↓        ↓
//!  Tree v0  Tree v1  Tree v2
//! ```

use crate::config::EditorConfig;
use crate::starter::starter_tree;
use crate::{EditorError, Mutation, MutationResult};
use domedit_tree::{find_node_by_id, find_parent_by_id, IdGenerator, Node, NodeId, Tree};
use std::fmt;
use tracing::{info, instrument, warn};

/// Editable in-memory document
pub struct Document {
    /// Display name, also used to seed sequential ids
    pub name: String,

    /// Current version number (increments on each successful mutation)
    pub version: u64,

    tree: Tree,
    ids: Box<dyn IdGenerator + Send>,
}

impl Document {
    pub fn new(name: impl Into<String>, tree: Tree, ids: Box<dyn IdGenerator + Send>) -> Self {
        Self {
            name: name.into(),
            version: 0,
            tree,
            ids,
        }
    }

    /// Create a document using the id strategy from `config`
    pub fn with_config(name: impl Into<String>, tree: Tree, config: &EditorConfig) -> Self {
        let name = name.into();
        let ids = config.id_generator(&name);
        Self::new(name, tree, ids)
    }

    /// Document seeded with the starter page
    pub fn starter(name: impl Into<String>, ids: Box<dyn IdGenerator + Send>) -> Self {
        Self::new(name, starter_tree(), ids)
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_id(&self) -> &NodeId {
        &self.tree.id
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        find_node_by_id(&self.tree, id)
    }

    pub fn parent_of(&self, id: &str) -> Option<&Node> {
        find_parent_by_id(&self.tree, id)
    }

    /// Apply a mutation
    ///
    /// On failure the current tree and version are left as they were.
    #[instrument(skip(self, mutation), fields(document = %self.name, mutation = mutation.name(), node_id = mutation.node_id()))]
    pub fn apply(&mut self, mutation: &Mutation) -> Result<MutationResult, EditorError> {
        let applied = match mutation.apply(&self.tree, self.ids.as_mut()) {
            Ok(applied) => applied,
            Err(err) => {
                warn!(error = %err, "Mutation rejected");
                return Err(err.into());
            }
        };

        self.tree = applied.tree;
        self.version += 1;
        info!(version = self.version, nodes = self.tree.node_count(), "Mutation applied");

        Ok(MutationResult {
            version: self.version,
            created: applied.created,
        })
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}
