//! Schema assembly.
//!
//! Top-level entry point of the generator: compiles every entity type of a
//! [`Model`] and joins the emitted blocks into one SDL document.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::model::Model;
use crate::schema::emitter::{CompiledAttribute, CompiledType, GraphqlEmitter};
use crate::schema::facts::FactIndex;
use crate::schema::fields::{CollisionPolicy, CompiledField, FieldCompiler, LabelSource};
use crate::schema::names::NameSet;
use crate::schema::scalar::{NameRules, TypeMapper};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Entity type '{entity}' is declared more than once")]
    DuplicateEntity { entity: String },

    #[error("Field '{field}' is emitted more than once on type '{entity}'")]
    DuplicateField { entity: String, field: String },
}

/// Knobs for a generator run.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub policy: CollisionPolicy,
    pub label_source: LabelSource,
    /// Emit attributes sorted by name instead of document order
    pub sort_attributes: bool,
    pub name_rules: NameRules,
}

/// A fully compiled schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSchema {
    pub handle: Option<String>,
    /// Entity types sorted by name
    pub types: Vec<CompiledType>,
}

impl GeneratedSchema {
    /// Render the SDL document, ending with exactly one newline.
    pub fn to_sdl(&self) -> String {
        let mut sections = vec![GraphqlEmitter::emit_header(self.handle.as_deref())];
        sections.extend(self.types.iter().map(GraphqlEmitter::emit_type));
        let mut sdl = sections.join("\n\n");
        sdl.truncate(sdl.trim_end().len());
        sdl.push('\n');
        sdl
    }
}

/// Compile a model into a schema.
pub fn generate(model: &Model, options: &GenerationOptions) -> Result<GeneratedSchema, GenerateError> {
    let mut entities = NameSet::new();
    for entity in &model.entities {
        if !entities.claim(&entity.name) {
            return Err(GenerateError::DuplicateEntity {
                entity: entity.name.clone(),
            });
        }
    }

    let index = FactIndex::from_section(&model.relationships);
    let compiler = FieldCompiler::new(options.policy, options.label_source, index.labels());
    let mapper = TypeMapper::new(options.name_rules.clone());

    let mut ordered: Vec<_> = model.entities.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name));

    let mut types = Vec::with_capacity(ordered.len());
    for entity in ordered {
        let mut attributes: Vec<CompiledAttribute> = entity
            .attributes
            .iter()
            .map(|attr| CompiledAttribute {
                name: attr.name.clone(),
                field_type: mapper.field_type(attr),
            })
            .collect();
        if options.sort_attributes {
            attributes.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let fields = compiler.compile(&entity.name, index.facts_for(&entity.name));
        check_unique_fields(&entity.name, &fields)?;
        debug!(
            entity = %entity.name,
            attributes = attributes.len(),
            relationships = fields.len(),
            "compiled entity type"
        );

        types.push(CompiledType {
            name: entity.name.clone(),
            attributes,
            fields,
        });
    }

    Ok(GeneratedSchema {
        handle: model.handle.clone(),
        types,
    })
}

/// Compile a model and render it straight to SDL.
pub fn generate_sdl(model: &Model, options: &GenerationOptions) -> Result<String, GenerateError> {
    generate(model, options).map(|schema| schema.to_sdl())
}

fn check_unique_fields(entity: &str, fields: &[CompiledField]) -> Result<(), GenerateError> {
    let mut names = NameSet::new();
    for field in fields {
        if !names.claim(&field.name) {
            return Err(GenerateError::DuplicateField {
                entity: entity.to_string(),
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}
