//! Core model definition types.
//!
//! Provides the format-agnostic in-memory representation of a data model.
//! Both the MDF and Memgraph loaders produce these types, and the schema
//! generator consumes only these.

use std::collections::HashSet;

/// Declared value domain of an attribute.
///
/// `value` is the raw domain name as written in the source document
/// (e.g. "string", "integer", "list"); `item` is only meaningful for lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub value: String,
    pub item: Option<String>,
}

impl Domain {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            item: None,
        }
    }

    pub fn list_of(item: impl Into<String>) -> Self {
        Self {
            value: "list".to_string(),
            item: Some(item.into()),
        }
    }
}

/// A single attribute of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name (e.g., "participant_id", "age_at_diagnosis")
    pub name: String,

    /// Declared domain. None means no metadata was available and the
    /// type is inferred from the name.
    pub domain: Option<Domain>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, domain: Option<Domain>) -> Self {
        Self {
            name: name.into(),
            domain,
        }
    }

    pub fn undeclared(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

/// A named entity type (graph node label) with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    /// Entity identifier (e.g., "participant", "sample")
    pub name: String,

    /// Attributes in document order
    pub attributes: Vec<Attribute>,
}

impl EntityType {
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// Drop repeated attribute names, keeping the first declaration.
    pub fn drop_repeated_attributes(&mut self) {
        let mut seen = HashSet::new();
        self.attributes.retain(|attr| seen.insert(attr.name.clone()));
    }
}

/// One source/destination pair of an endpoint-style relationship.
///
/// Either side may be missing in a malformed document; such endpoints
/// are dropped during fact extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub source: Option<String>,
    pub destination: Option<String>,
}

impl Endpoint {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            destination: Some(destination.into()),
        }
    }
}

/// A relationship label with its explicit list of endpoint pairs (MDF `Ends`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDef {
    pub label: String,
    pub ends: Vec<Endpoint>,
}

/// A flat edge record carrying its own label and start/end label arrays
/// (Memgraph schema `edges`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub label: String,
    pub start_labels: Vec<String>,
    pub end_labels: Vec<String>,
}

/// The relationship section of a model, in whichever shape the source used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipSection {
    /// Per-label endpoint lists
    Endpoints(Vec<RelationshipDef>),
    /// Flat edge records
    Edges(Vec<EdgeRecord>),
}

impl Default for RelationshipSection {
    fn default() -> Self {
        RelationshipSection::Endpoints(Vec::new())
    }
}

/// A complete loaded data model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// Model handle, when the source declares one (MDF `Handle`)
    pub handle: Option<String>,

    /// Entity types in document order
    pub entities: Vec<EntityType>,

    pub relationships: RelationshipSection,
}
