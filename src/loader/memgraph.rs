//! Memgraph schema dump documents.
//!
//! Deserializes the JSON produced by Memgraph's `SHOW SCHEMA INFO`
//! (`{"schema": {"nodes": [...], "edges": [...]}}`).

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use super::LoadError;
use crate::model::{Attribute, Domain, EdgeRecord, EntityType, Model, RelationshipSection};

#[derive(Debug, Default, Deserialize)]
pub struct MemgraphSchema {
    #[serde(default)]
    pub schema: MemgraphBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemgraphBody {
    #[serde(default)]
    pub nodes: Vec<MemgraphNode>,

    #[serde(default)]
    pub edges: Vec<MemgraphEdge>,
}

#[derive(Debug, Deserialize)]
pub struct MemgraphNode {
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub properties: Vec<MemgraphProperty>,
}

#[derive(Debug, Deserialize)]
pub struct MemgraphProperty {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub types: Vec<PropertyType>,
}

/// Property types appear either as bare names or as `{type, count}` records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PropertyType {
    Named(String),
    Counted {
        #[serde(rename = "type")]
        type_name: String,
    },
}

impl PropertyType {
    fn name(&self) -> &str {
        match self {
            PropertyType::Named(name) => name,
            PropertyType::Counted { type_name } => type_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MemgraphEdge {
    #[serde(rename = "type", default)]
    pub edge_type: String,

    #[serde(default)]
    pub start_node_labels: Vec<String>,

    #[serde(default)]
    pub end_node_labels: Vec<String>,
}

impl MemgraphSchema {
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        serde_yaml::from_value(value).map_err(|source| LoadError::InvalidStructure {
            shape: "Memgraph schema",
            source,
        })
    }

    /// Convert into a [`Model`]. Nodes without labels are skipped; the first
    /// label names the entity.
    ///
    /// Memgraph lists one node entry per label combination, so entries
    /// sharing a first label merge into one entity type. Properties keep
    /// first-seen order and the first occurrence of each key wins.
    pub fn into_model(self) -> Model {
        let mut merged: IndexMap<String, Vec<Attribute>> = IndexMap::new();
        for node in self.schema.nodes {
            let Some(label) = node.labels.into_iter().next() else {
                debug!("skipping Memgraph node without labels");
                continue;
            };

            let attributes = merged.entry(label).or_default();
            attributes.extend(
                node.properties
                    .into_iter()
                    .filter(|p| !p.key.is_empty())
                    .map(|p| {
                        let domain = p.types.first().map(|t| Domain::new(t.name()));
                        Attribute::new(p.key, domain)
                    }),
            );
        }

        let entities = merged
            .into_iter()
            .map(|(label, attributes)| {
                let mut entity = EntityType::new(label, attributes);
                entity.drop_repeated_attributes();
                entity
            })
            .collect();

        let edges = self
            .schema
            .edges
            .into_iter()
            .map(|e| EdgeRecord {
                label: e.edge_type,
                start_labels: e.start_node_labels,
                end_labels: e.end_node_labels,
            })
            .collect();

        Model {
            handle: None,
            entities,
            relationships: RelationshipSection::Edges(edges),
        }
    }
}
