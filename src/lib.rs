//! data_model_graphql library - data model to GraphQL SDL generator
//!
//! Loads MDF model/props YAML or Memgraph schema JSON, compiles entity types
//! and relationships into uniquely named fields, and emits a GraphQL schema
//! annotated with Neo4j `@relationship` directives.

pub mod cli;
pub mod config;
pub mod loader;
pub mod model;
pub mod output;
pub mod schema;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
