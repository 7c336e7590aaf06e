//! # DomEdit Editor
//!
//! Editing layer on top of the `domedit-tree` engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ session: selection + convenience edits      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: current tree, version, id source  │
//! │  - Apply mutations with validation          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ tree: search, update, wrap/unwrap/copy/del  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use domedit_editor::{Document, EditSession};
//! use domedit_tree::SequentialIds;
//!
//! let doc = Document::starter("page.html", Box::new(SequentialIds::from_seed("page")));
//! let mut session = EditSession::new("local", doc);
//!
//! session.select("2");
//! session.set_styles([("color", "tomato")]).unwrap();
//! session.wrap(Some("header")).unwrap();
//!
//! assert_eq!(session.selected_node().unwrap().tag, "header");
//! ```

mod config;
mod document;
mod errors;
mod mutations;
mod outline;
mod session;
mod starter;

pub use config::{EditorConfig, IdStrategy, DEFAULT_CONFIG_NAME};
pub use document::Document;
pub use errors::EditorError;
pub use mutations::{Applied, Mutation, MutationError, MutationResult};
pub use outline::outline;
pub use session::EditSession;
pub use starter::starter_tree;

// Re-export tree types for convenience
pub use domedit_tree::{Node, NodeId, Tree};
