//! Configuration file handling.
//!
//! Generator settings come from an optional `.data_model_graphql.json` in the
//! current directory, or from an explicit `--config` path. Every key is
//! optional:
//!
//! ```json
//! {
//!   "generator": {
//!     "collision_policy": "suffix",
//!     "label_source": "fact",
//!     "sort_attributes": true,
//!     "name_rules": [
//!       { "match": { "suffix": "_id" }, "type": "String" },
//!       { "match": { "contains": "_count" }, "type": "Int" }
//!     ]
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::schema::{CollisionPolicy, GenerationOptions, LabelSource, NameRule, NameRules};

/// Config file looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".data_model_graphql.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in config file '{path}': {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub generator: GeneratorConfig,
}

/// Generator settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub collision_policy: CollisionPolicy,
    pub label_source: LabelSource,
    pub sort_attributes: bool,
    /// Replaces the built-in name inference table when present
    pub name_rules: Option<Vec<NameRule>>,
}

impl ConfigFile {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is read if present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

impl GeneratorConfig {
    /// Convert to generator options.
    pub fn to_options(&self) -> GenerationOptions {
        let name_rules = match &self.name_rules {
            Some(rules) => NameRules::new(rules.clone()),
            None => NameRules::default(),
        };
        GenerationOptions {
            policy: self.collision_policy,
            label_source: self.label_source,
            sort_attributes: self.sort_attributes,
            name_rules,
        }
    }
}
