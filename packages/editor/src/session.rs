//! # Edit Session Management
//!
//! Tracks one user's editing state: the document and the selected node.
//!
//! Structural edits can remove or move the selected node, so every
//! mutation applied through the session repairs the selection afterwards:
//!
//! | Mutation    | Selection afterwards                                 |
//! |-------------|------------------------------------------------------|
//! | Wrap        | the new wrapper (unless `selectAfterWrap` is false)  |
//! | Unwrap      | the root of the returned tree                        |
//! | Duplicate   | unchanged, the original stays selected               |
//! | Delete      | the deleted node's parent, if the selection is gone  |
//! | Set*        | unchanged                                            |

use crate::config::EditorConfig;
use crate::{Document, EditorError, Mutation, MutationResult};
use domedit_tree::{Node, NodeId};
use std::collections::HashMap;
use tracing::debug;

/// Single edit session
#[derive(Debug)]
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    /// Document being edited
    pub document: Document,

    selected: Option<NodeId>,
    default_wrap_tag: String,
    select_after_wrap: bool,
}

impl EditSession {
    pub fn new(id: impl Into<String>, document: Document) -> Self {
        Self::with_config(id, document, &EditorConfig::default())
    }

    pub fn with_config(id: impl Into<String>, document: Document, config: &EditorConfig) -> Self {
        Self {
            id: id.into(),
            document,
            selected: None,
            default_wrap_tag: config.default_wrap_tag.clone(),
            select_after_wrap: config.select_after_wrap,
        }
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Selected node in the current tree, if it still exists
    pub fn selected_node(&self) -> Option<&Node> {
        self.selected
            .as_ref()
            .and_then(|id| self.document.find(id.as_str()))
    }

    /// Select `id`; unknown ids are ignored and reported as `false`
    pub fn select(&mut self, id: &str) -> bool {
        if self.document.find(id).is_none() {
            debug!(node_id = %id, "Ignoring selection of unknown node");
            return false;
        }

        self.selected = Some(NodeId::from(id));
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Apply a mutation and repair the selection
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let had_selection = self.selected.is_some();
        let former_parent = match &mutation {
            Mutation::Delete { node_id } => self.document.parent_of(node_id).map(|p| p.id.clone()),
            _ => None,
        };

        let result = self.document.apply(&mutation)?;

        match &mutation {
            Mutation::Wrap { .. } if self.select_after_wrap => {
                self.selected = result.created.clone();
            }
            Mutation::Unwrap { .. } => {
                self.selected = Some(self.document.root_id().clone());
            }
            Mutation::Delete { .. } if had_selection && self.selected_node().is_none() => {
                self.selected = former_parent;
            }
            _ => {}
        }

        debug!(session = %self.id, selected = ?self.selected, "Selection after {}", mutation.name());
        Ok(result)
    }

    fn require_selection(&self) -> Result<String, EditorError> {
        self.selected_node()
            .map(|node| node.id.to_string())
            .ok_or(EditorError::NoSelection)
    }

    /// Merge styles into the selected node
    pub fn set_styles<I, K, V>(&mut self, styles: I) -> Result<MutationResult, EditorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let node_id = self.require_selection()?;
        let styles: HashMap<String, String> =
            styles.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.apply(Mutation::SetStyles { node_id, styles })
    }

    /// Merge attributes into the selected node
    pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> Result<MutationResult, EditorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let node_id = self.require_selection()?;
        let attributes: HashMap<String, String> =
            attributes.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.apply(Mutation::SetAttributes { node_id, attributes })
    }

    /// Wrap the selected node, using the configured default tag when `tag` is `None`
    pub fn wrap(&mut self, tag: Option<&str>) -> Result<MutationResult, EditorError> {
        let node_id = self.require_selection()?;
        let tag = tag.unwrap_or(&self.default_wrap_tag).to_string();
        self.apply(Mutation::Wrap { node_id, tag })
    }

    /// Remove the selected node's parent, keeping the parent's children
    pub fn unwrap_parent(&mut self) -> Result<MutationResult, EditorError> {
        let node_id = self.require_selection()?;
        self.apply(Mutation::Unwrap { node_id })
    }

    pub fn duplicate(&mut self) -> Result<MutationResult, EditorError> {
        let node_id = self.require_selection()?;
        self.apply(Mutation::Duplicate { node_id })
    }

    pub fn delete(&mut self) -> Result<MutationResult, EditorError> {
        let node_id = self.require_selection()?;
        self.apply(Mutation::Delete { node_id })
    }
}
