//! Error types for tree edits

use thiserror::Error;

/// Why a structural edit could not be carried out
///
/// Every variant is a "not found" outcome from the caller's point of view:
/// either the id is absent or the edit has no parent position to work on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Cannot edit the root node: {0}")]
    RootNode(String),

    #[error("Parent of {0} is the root and cannot be removed")]
    ParentIsRoot(String),
}

impl TreeError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TreeError::NodeNotFound(_) | TreeError::RootNode(_) | TreeError::ParentIsRoot(_)
        )
    }

    /// Id the failed edit was aimed at
    pub fn node_id(&self) -> &str {
        match self {
            TreeError::NodeNotFound(id) | TreeError::RootNode(id) | TreeError::ParentIsRoot(id) => id,
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
