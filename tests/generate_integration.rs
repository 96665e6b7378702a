//! End-to-end generation tests through the public API.
//!
//! Each test writes its input documents to temp files, loads them with
//! `load_model`, and checks the generated SDL.

use std::io::Write;

use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

use data_model_graphql::loader::{load_model, LoadError};
use data_model_graphql::model::Model;
use data_model_graphql::schema::{generate_sdl, CollisionPolicy, GenerationOptions};

const MODEL: &str = r#"
Handle: PED
Nodes:
  case:
    Props:
      - case_id
  file:
    Props:
      - file_size
      - file_name
Relationships:
  of_case:
    Mul: many_to_one
    Ends:
      - Src: file
        Dst: case
"#;

const PROPS: &str = r#"
PropDefinitions:
  case_id:
    Type: string
  file_size:
    Type: integer
  file_name:
    Type: string
"#;

const MEMGRAPH: &str = r#"{
  "schema": {
    "nodes": [
      {"labels": ["participant"], "properties": [{"key": "participant_id", "types": ["String"]}]},
      {"labels": ["sample"], "properties": [
        {"key": "sample_id", "types": [{"type": "String", "count": 2}]},
        {"key": "read_count", "types": ["Integer"]},
        {"key": "is_tumor", "types": []}
      ]}
    ],
    "edges": [
      {"type": "of_participant", "start_node_labels": ["sample"], "end_node_labels": ["participant"]},
      {"type": "derived_from", "start_node_labels": ["sample"], "end_node_labels": ["sample"]}
    ]
  }
}"#;

fn temp_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn load(documents: &[(&str, &str)]) -> Result<Model, LoadError> {
    let files: Vec<NamedTempFile> = documents
        .iter()
        .map(|(content, ext)| temp_file(content, ext))
        .collect();
    let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
    load_model(&paths)
}

#[fixture]
fn mdf_model() -> Model {
    load(&[(MODEL, "yml"), (PROPS, "yml")]).expect("MDF pair should load")
}

#[fixture]
fn memgraph_model() -> Model {
    load(&[(MEMGRAPH, "json")]).expect("Memgraph schema should load")
}

#[rstest]
fn test_mdf_pair_drop_policy(mdf_model: Model) {
    let sdl = generate_sdl(&mdf_model, &GenerationOptions::default()).unwrap();
    let expected = "\
#graphql

# Model Handle: PED

# Type for field count results
type FieldCount {
  field: String!
  count: Int!
}

type case {
  case_id: String
  cases: [file!]! @relationship(type: \"OF_CASE\", direction: IN)
}

type file {
  file_size: Int
  file_name: String
  cases: [case!]! @relationship(type: \"OF_CASE\", direction: OUT)
}
";
    assert_eq!(sdl, expected);
}

#[rstest]
fn test_mdf_pair_suffix_policy(mdf_model: Model) {
    let options = GenerationOptions {
        policy: CollisionPolicy::Suffix,
        ..GenerationOptions::default()
    };
    let sdl = generate_sdl(&mdf_model, &options).unwrap();
    assert!(sdl.contains("  case_of_case: [file!]! @relationship(type: \"OF_CASE\", direction: IN)\n"));
    assert!(sdl.contains("  case_of_case: [case!]! @relationship(type: \"OF_CASE\", direction: OUT)\n"));
}

#[rstest]
fn test_memgraph_schema_suffix_policy(memgraph_model: Model) {
    let options = GenerationOptions {
        policy: CollisionPolicy::Suffix,
        ..GenerationOptions::default()
    };
    let sdl = generate_sdl(&memgraph_model, &options).unwrap();
    let expected_sample = "\
type sample {
  sample_id: String
  read_count: Int
  is_tumor: Boolean
  participant_of_participant: [participant!]! @relationship(type: \"OF_PARTICIPANT\", direction: OUT)
  sample_derived_from: [sample!]! @relationship(type: \"DERIVED_FROM\", direction: OUT)
  sample_derived_from_2: [sample!]! @relationship(type: \"DERIVED_FROM\", direction: IN)
}
";
    assert!(sdl.ends_with(expected_sample), "unexpected sample block:\n{sdl}");
    assert!(!sdl.contains("# Model Handle"));
}

#[rstest]
fn test_memgraph_schema_drop_policy_keeps_one_self_field(memgraph_model: Model) {
    let sdl = generate_sdl(&memgraph_model, &GenerationOptions::default()).unwrap();
    assert!(sdl.contains("  participants: [participant!]! @relationship(type: \"OF_PARTICIPANT\", direction: OUT)\n"));
    assert!(sdl.contains("  sample: [sample!]! @relationship(type: \"DERIVED_FROM\", direction: OUT)\n"));
    assert_eq!(sdl.matches("  sample: [sample!]!").count(), 1);
}

#[rstest]
fn test_generation_is_deterministic(mdf_model: Model) {
    let reloaded = load(&[(MODEL, "yml"), (PROPS, "yml")]).unwrap();
    let first = generate_sdl(&mdf_model, &GenerationOptions::default()).unwrap();
    let second = generate_sdl(&reloaded, &GenerationOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn test_memgraph_label_combinations_merge_into_one_type() {
    let dump = r#"{
      "schema": {
        "nodes": [
          {"labels": ["sample"], "properties": [{"key": "sample_id", "types": ["String"]}]},
          {"labels": ["sample", "tumor"], "properties": [
            {"key": "sample_id", "types": ["String"]},
            {"key": "tumor_grade", "types": ["String"]}
          ]}
        ],
        "edges": []
      }
    }"#;
    let model = load(&[(dump, "json")]).unwrap();
    let sdl = generate_sdl(&model, &GenerationOptions::default()).unwrap();
    assert!(sdl.ends_with("type sample {\n  sample_id: String\n  tumor_grade: String\n}\n"));
}

#[rstest]
fn test_memgraph_mixed_with_mdf_is_rejected() {
    let err = load(&[(MEMGRAPH, "json"), (MODEL, "yml")]).unwrap_err();
    assert!(matches!(err, LoadError::MixedShapes { .. }));
}
