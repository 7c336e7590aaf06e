//! Editor configuration (`domedit.config.json`)

use crate::EditorError;
use domedit_tree::{IdGenerator, RandomIds, SequentialIds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "domedit.config.json";

/// Editor configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Tag offered when wrapping without an explicit choice
    #[serde(default = "default_wrap_tag")]
    pub default_wrap_tag: String,

    /// How fresh node ids are generated
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Seed for sequential ids (defaults to a hash of the document name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_seed: Option<String>,

    /// `tracing` filter directive used by the playground
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Move the selection onto the wrapper after a wrap
    #[serde(default = "default_true")]
    pub select_after_wrap: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

fn default_wrap_tag() -> String {
    "div".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl EditorConfig {
    /// Load config from a directory, falling back to defaults
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, EditorError> {
        let config_path = Self::path_in(dir);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn path_in(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(DEFAULT_CONFIG_NAME)
    }

    /// Build the configured id generator for a document
    pub fn id_generator(&self, document_name: &str) -> Box<dyn IdGenerator + Send> {
        match self.id_strategy {
            IdStrategy::Uuid => Box::new(RandomIds),
            IdStrategy::Sequential => match &self.id_seed {
                Some(seed) => Box::new(SequentialIds::from_seed(seed.clone())),
                None => Box::new(SequentialIds::new(document_name)),
            },
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_wrap_tag: default_wrap_tag(),
            id_strategy: IdStrategy::default(),
            id_seed: None,
            log_filter: default_log_filter(),
            select_after_wrap: true,
        }
    }
}
