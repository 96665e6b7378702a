//! Format-agnostic data model.
//!
//! Loaders for each input shape build a [`Model`]; the schema generator
//! consumes it without knowing where it came from.

mod definition;

pub use definition::{
    Attribute, Domain, EdgeRecord, Endpoint, EntityType, Model, RelationshipDef,
    RelationshipSection,
};
