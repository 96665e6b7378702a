//! MDF (Model Description Format) documents.
//!
//! These types deserialize the merged MDF model + props documents. Only the
//! keys the generator needs are modeled; everything else (descriptions, tags,
//! terms, multiplicities, ...) is ignored.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use super::{LoadError, MDF_ORDER_HINT};
use crate::model::{
    Attribute, Domain, Endpoint, EntityType, Model, RelationshipDef, RelationshipSection,
};

#[derive(Debug, Default, Deserialize)]
pub struct MdfDocument {
    #[serde(rename = "Handle", default)]
    pub handle: Option<String>,

    #[serde(rename = "Nodes", default)]
    pub nodes: Option<IndexMap<String, Option<MdfNode>>>,

    #[serde(rename = "Relationships", default)]
    pub relationships: Option<IndexMap<String, Option<MdfRelationship>>>,

    #[serde(rename = "PropDefinitions", default)]
    pub prop_definitions: Option<IndexMap<String, Option<MdfProperty>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MdfNode {
    #[serde(rename = "Props", default)]
    pub props: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MdfRelationship {
    #[serde(rename = "Ends", default)]
    pub ends: Option<Vec<MdfEnd>>,
}

#[derive(Debug, Deserialize)]
pub struct MdfEnd {
    #[serde(rename = "Src", default)]
    pub src: Option<String>,

    #[serde(rename = "Dst", default)]
    pub dst: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MdfProperty {
    #[serde(rename = "Type", default)]
    pub type_spec: Option<TypeSpec>,

    #[serde(rename = "Enum", default)]
    pub enum_values: Option<Vec<Value>>,
}

/// The forms an MDF `Type` value can take.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// `Type: integer`
    Name(String),
    /// `Type: [a, b, c]` - inline enumeration
    Values(Vec<Value>),
    /// `Type: { value_type: list, item_type: ... }`
    Detailed(DetailedType),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailedType {
    #[serde(default)]
    pub value_type: Option<String>,

    #[serde(default)]
    pub item_type: Option<Box<TypeSpec>>,

    #[serde(default)]
    pub pattern: Option<String>,
}

impl TypeSpec {
    /// The domain name this `Type` value denotes, if any.
    fn domain_name(&self) -> Option<String> {
        match self {
            TypeSpec::Name(name) => Some(name.clone()),
            TypeSpec::Values(_) => Some("value_set".to_string()),
            TypeSpec::Detailed(detail) => match (&detail.value_type, &detail.pattern) {
                (Some(value_type), _) => Some(value_type.clone()),
                (None, Some(_)) => Some("regexp".to_string()),
                (None, None) => None,
            },
        }
    }

    fn to_domain(&self) -> Option<Domain> {
        let value = self.domain_name()?;
        let item = match self {
            TypeSpec::Detailed(detail) => detail.item_type.as_ref().and_then(|item| item.domain_name()),
            _ => None,
        };
        Some(Domain { value, item })
    }
}

impl MdfProperty {
    fn domain(&self) -> Option<Domain> {
        match (&self.type_spec, &self.enum_values) {
            (Some(spec), _) => spec.to_domain(),
            (None, Some(_)) => Some(Domain::new("value_set")),
            (None, None) => None,
        }
    }
}

/// Deep-merge documents left to right.
///
/// Mappings merge key by key; any other value in a later document replaces
/// the earlier one.
pub fn merge_documents(documents: impl IntoIterator<Item = Value>) -> Value {
    let mut merged = Value::Null;
    for document in documents {
        merge_into(&mut merged, document);
    }
    merged
}

fn merge_into(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Mapping(overlay_map) => match base {
            Value::Mapping(base_map) => {
                for (key, value) in overlay_map {
                    match base_map.get_mut(&key) {
                        Some(existing) => merge_into(existing, value),
                        None => {
                            base_map.insert(key, value);
                        }
                    }
                }
            }
            slot => *slot = Value::Mapping(overlay_map),
        },
        Value::Null => {}
        other => *base = other,
    }
}

impl MdfDocument {
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value).map_err(|source| LoadError::InvalidStructure {
            shape: "MDF",
            source,
        })
    }

    /// Validate and convert into a [`Model`].
    pub fn into_model(self) -> Result<Model, LoadError> {
        let nodes = self.nodes.ok_or(LoadError::MissingNodes {
            hint: MDF_ORDER_HINT,
        })?;
        let definitions = self.prop_definitions;

        let mut entities = Vec::with_capacity(nodes.len());
        for (node_name, node) in &nodes {
            let props = node
                .as_ref()
                .and_then(|n| n.props.clone())
                .unwrap_or_default();

            let mut attributes = Vec::with_capacity(props.len());
            for prop in props {
                let Some(definitions) = &definitions else {
                    return Err(LoadError::MissingPropDefinitions {
                        node: node_name.clone(),
                        property: prop,
                        hint: MDF_ORDER_HINT,
                    });
                };
                let domain = definitions
                    .get(&prop)
                    .and_then(|def| def.as_ref())
                    .and_then(MdfProperty::domain);
                if domain.is_none() {
                    debug!(node = %node_name, property = %prop, "no declared type, inferring from name");
                }
                attributes.push(Attribute::new(prop, domain));
            }
            let mut entity = EntityType::new(node_name.clone(), attributes);
            entity.drop_repeated_attributes();
            entities.push(entity);
        }

        let known: HashSet<&str> = nodes.keys().map(String::as_str).collect();
        let mut relationships = Vec::new();
        for (label, relationship) in self.relationships.unwrap_or_default() {
            let ends = relationship.and_then(|r| r.ends).unwrap_or_default();
            let mut endpoints = Vec::with_capacity(ends.len());
            for end in ends {
                for node in [&end.src, &end.dst].into_iter().flatten() {
                    if !known.contains(node.as_str()) {
                        return Err(LoadError::UnknownNode {
                            relationship: label.clone(),
                            node: node.clone(),
                            hint: MDF_ORDER_HINT,
                        });
                    }
                }
                endpoints.push(Endpoint {
                    source: end.src,
                    destination: end.dst,
                });
            }
            relationships.push(RelationshipDef {
                label,
                ends: endpoints,
            });
        }

        Ok(Model {
            handle: self.handle,
            entities,
            relationships: RelationshipSection::Endpoints(relationships),
        })
    }
}
