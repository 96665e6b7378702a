//! GraphQL SDL emitter.
//!
//! Renders compiled entity types as SDL blocks annotated for the Neo4j GraphQL
//! library. The output format is deterministic: same input, same bytes.

use serde::Serialize;

use crate::schema::escape::escape_string;
use crate::schema::fields::CompiledField;
use crate::schema::inflect::sanitize_field_name;
use crate::schema::scalar::FieldType;

/// Fixed aggregation result type used by downstream consumers.
pub const FIELD_COUNT_TYPE: &str = "# Type for field count results
type FieldCount {
  field: String!
  count: Int!
}";

/// An attribute with its resolved GraphQL type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledAttribute {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// One entity type with everything needed to emit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledType {
    pub name: String,
    pub attributes: Vec<CompiledAttribute>,
    pub fields: Vec<CompiledField>,
}

/// Emitter for GraphQL SDL.
pub struct GraphqlEmitter;

impl GraphqlEmitter {
    /// Generate the SDL block for a single type.
    ///
    /// Produces output in the format:
    /// ```graphql
    /// type sample {
    ///   sample_id: String
    ///   diagnoses: [diagnosis!]! @relationship(type: "OF_SAMPLE", direction: IN)
    /// }
    /// ```
    pub fn emit_type(compiled: &CompiledType) -> String {
        let mut lines = Vec::with_capacity(compiled.attributes.len() + compiled.fields.len() + 2);
        lines.push(format!("type {} {{", compiled.name));
        lines.extend(compiled.attributes.iter().map(Self::emit_attribute));
        lines.extend(compiled.fields.iter().map(Self::emit_relationship));
        lines.push("}".to_string());
        lines.join("\n")
    }

    /// Attribute line. Attributes are always nullable.
    pub fn emit_attribute(attribute: &CompiledAttribute) -> String {
        format!(
            "  {}: {}",
            sanitize_field_name(&attribute.name),
            attribute.field_type
        )
    }

    /// Relationship line: non-null list of non-null targets plus the traversal annotation.
    pub fn emit_relationship(field: &CompiledField) -> String {
        format!(
            "  {}: [{}!]! @relationship(type: \"{}\", direction: {})",
            sanitize_field_name(&field.name),
            field.target,
            escape_string(&field.label),
            field.direction.token()
        )
    }

    /// Document preamble: format marker, optional model handle, `FieldCount` type.
    pub fn emit_header(handle: Option<&str>) -> String {
        let mut sections = vec!["#graphql".to_string()];
        if let Some(handle) = handle {
            sections.push(format!("# Model Handle: {}", handle));
        }
        sections.push(FIELD_COUNT_TYPE.to_string());
        sections.join("\n\n")
    }
}
