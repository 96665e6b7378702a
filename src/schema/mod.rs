//! Data model to GraphQL SDL generation.
//!
//! # Overview
//!
//! The generator is a pure pipeline over an in-memory [`Model`](crate::model::Model):
//!
//! 1. **Type mapping** (`scalar.rs`) - attribute domain or name -> GraphQL scalar
//! 2. **Fact extraction** (`facts.rs`) - relationship section -> directed facts per type
//! 3. **Field compilation** (`fields.rs`) - directed facts -> unique relationship fields
//! 4. **Emission** (`emitter.rs`) - one `type` block per entity
//! 5. **Assembly** (`assembler.rs`) - header + sorted type blocks
//!
//! # Example
//!
//! ```ignore
//! let schema = generate(&model, &GenerationOptions::default())?;
//! print!("{}", schema.to_sdl());
//! ```

mod assembler;
mod emitter;
mod escape;
mod facts;
mod fields;
mod inflect;
mod names;
mod scalar;

pub use assembler::{generate, generate_sdl, GenerateError, GeneratedSchema, GenerationOptions};
pub use emitter::{CompiledAttribute, CompiledType, GraphqlEmitter, FIELD_COUNT_TYPE};
pub use facts::{extract_facts, DirectedFact, Direction, FactIndex, RelationshipFact};
pub use fields::{recover_label, CollisionPolicy, CompiledField, FieldCompiler, LabelSource};
pub use names::NameSet;
pub use inflect::{pluralize, sanitize_field_name, singularize};
pub use scalar::{map_domain, FieldType, NamePattern, NameRule, NameRules, ScalarType, TypeMapper};
