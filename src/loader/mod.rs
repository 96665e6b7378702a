//! Model loading.
//!
//! Reads one or more input documents (YAML or JSON), detects which of the two
//! supported shapes they use, and builds a [`Model`]:
//!
//! - **MDF**: a model document plus a props document (`Nodes`,
//!   `Relationships`, `PropDefinitions`), merged left to right
//! - **Memgraph**: a single schema dump with `schema.nodes` / `schema.edges`

mod mdf;
mod memgraph;

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use crate::model::Model;

pub use mdf::{merge_documents, MdfDocument};
pub use memgraph::MemgraphSchema;

const MDF_ORDER_HINT: &str = "Hint: pass both the core model YAML and the props YAML, \
     in left-to-right merge order (model first, then props), e.g.\n  \
     data_model_graphql model.yml model-props.yml";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No input files given")]
    NoInput,

    #[error("Failed to read '{path}': {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML in '{path}': {source}")]
    YamlParseFailed {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON in '{path}': {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {shape} document structure: {source}")]
    InvalidStructure {
        shape: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Model has no 'Nodes' section.\n{hint}")]
    MissingNodes { hint: &'static str },

    #[error("Property '{property}' of node '{node}' has no definition: no 'PropDefinitions' section was loaded.\n{hint}")]
    MissingPropDefinitions {
        node: String,
        property: String,
        hint: &'static str,
    },

    #[error("Relationship '{relationship}' refers to unknown node '{node}'.\n{hint}")]
    UnknownNode {
        relationship: String,
        node: String,
        hint: &'static str,
    },

    #[error("'{path}' is a Memgraph schema document and must be the only input")]
    MixedShapes { path: String },
}

/// A parsed input document.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub content: Value,
}

impl Document {
    /// Memgraph dumps carry a top-level `schema` mapping.
    pub fn is_memgraph(&self) -> bool {
        matches!(self.content.get("schema"), Some(Value::Mapping(_)))
    }
}

/// Load a model from input files.
pub fn load_model<P: AsRef<Path>>(paths: &[P]) -> Result<Model, LoadError> {
    let documents = paths
        .iter()
        .map(|p| read_document(p.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    model_from_documents(documents)
}

/// Build a model from already parsed documents.
pub fn model_from_documents(documents: Vec<Document>) -> Result<Model, LoadError> {
    if documents.is_empty() {
        return Err(LoadError::NoInput);
    }

    if let Some(memgraph) = documents.iter().find(|d| d.is_memgraph()) {
        if documents.len() > 1 {
            return Err(LoadError::MixedShapes {
                path: memgraph.path.display().to_string(),
            });
        }
        debug!(path = %memgraph.path.display(), "loading Memgraph schema document");
        let schema = MemgraphSchema::from_value(memgraph.content.clone())?;
        return Ok(schema.into_model());
    }

    debug!(documents = documents.len(), "loading MDF documents");
    let merged = merge_documents(documents.into_iter().map(|d| d.content));
    MdfDocument::from_value(merged)?.into_model()
}

/// Read and parse one document. `.json` files go through `serde_json`,
/// everything else through `serde_yaml`.
pub fn read_document(path: &Path) -> Result<Document, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::FileReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(path, &text)
}

pub fn parse_document(path: &Path, text: &str) -> Result<Document, LoadError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let content = if is_json {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|source| LoadError::JsonParseFailed {
                path: path.display().to_string(),
                source,
            })?;
        serde_yaml::to_value(json).map_err(|source| LoadError::YamlParseFailed {
            path: path.display().to_string(),
            source,
        })?
    } else {
        serde_yaml::from_str(text).map_err(|source| LoadError::YamlParseFailed {
            path: path.display().to_string(),
            source,
        })?
    };

    Ok(Document {
        path: path.to_path_buf(),
        content,
    })
}
