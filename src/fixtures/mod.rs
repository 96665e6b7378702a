//! Shared test input documents.

/// MDF model document: nodes and relationships, no property definitions.
pub const MDF_MODEL: &str = r#"
Handle: TEST
Version: 1.0.0
Nodes:
  study:
    Props:
      - study_id
      - study_name
      - study_id
  participant:
    Props:
      - participant_id
      - age_at_enrollment
      - is_deceased
  diagnosis:
    Props:
      - diagnosis_id
      - diagnosis_classification_system
  sample:
    Props:
      - sample_id
      - anatomic_site
      - tumor_grades
      - sample_code
Relationships:
  of_study:
    Mul: many_to_one
    Ends:
      - Src: participant
        Dst: study
      - Src: sample
        Dst: study
  of_participant:
    Mul: many_to_one
    Ends:
      - Src: diagnosis
        Dst: participant
  of_sample:
    Mul: many_to_one
    Ends:
      - Src: diagnosis
        Dst: sample
  derived_from:
    Mul: many_to_one
    Ends:
      - Src: sample
        Dst: sample
  unused:
    Mul: one_to_one
"#;

/// MDF props document matching [`MDF_MODEL`]. `is_deceased` is left undefined.
pub const MDF_PROPS: &str = r#"
PropDefinitions:
  study_id:
    Desc: Study identifier
    Type: string
    Key: true
  study_name:
    Type: string
  participant_id:
    Type: string
    Key: true
  age_at_enrollment:
    Type:
      value_type: number
      units:
        - days
  diagnosis_id:
    Type: string
  diagnosis_classification_system:
    Type:
      - ICD-O-3.2
      - Other
  sample_id:
    Type: string
  anatomic_site:
    Enum:
      - Brain
      - Lung
  tumor_grades:
    Type:
      value_type: list
      item_type: integer
  sample_code:
    Type:
      pattern: "^S[0-9]+$"
"#;

/// Memgraph schema dump with an unlabelled node and a malformed edge.
pub const MEMGRAPH_SCHEMA: &str = r#"{
  "schema": {
    "nodes": [
      {
        "labels": ["study"],
        "properties": [
          {"key": "study_id", "types": [{"type": "String", "count": 3}]}
        ]
      },
      {
        "labels": [],
        "properties": [{"key": "orphan", "types": []}]
      },
      {
        "labels": ["participant", "person"],
        "properties": [
          {"key": "participant_id", "types": [{"type": "String", "count": 10}]}
        ]
      },
      {
        "labels": ["sample"],
        "properties": [
          {"key": "sample_id", "types": [{"type": "String", "count": 7}]},
          {"key": "read_count", "types": ["Integer"]},
          {"key": "is_tumor", "types": []}
        ]
      }
    ],
    "edges": [
      {"type": "of_study", "start_node_labels": ["participant"], "end_node_labels": ["study"]},
      {"type": "of_participant", "start_node_labels": ["sample"], "end_node_labels": ["participant"]},
      {"type": "derived_from", "start_node_labels": ["sample"], "end_node_labels": ["sample"]},
      {"type": "broken", "start_node_labels": [], "end_node_labels": ["sample"]}
    ]
  }
}"#;

/// Memgraph schema dump listing `sample` under two label combinations.
pub const MEMGRAPH_SHARED_LABELS: &str = r#"{
  "schema": {
    "nodes": [
      {
        "labels": ["sample"],
        "properties": [
          {"key": "sample_id", "types": [{"type": "String", "count": 4}]}
        ]
      },
      {
        "labels": ["participant"],
        "properties": [
          {"key": "participant_id", "types": ["String"]}
        ]
      },
      {
        "labels": ["sample", "tumor"],
        "properties": [
          {"key": "sample_id", "types": [{"type": "Integer", "count": 1}]},
          {"key": "tumor_grade", "types": ["String"]},
          {"key": "is_tumor", "types": []}
        ]
      }
    ],
    "edges": [
      {"type": "of_participant", "start_node_labels": ["sample", "tumor"], "end_node_labels": ["participant"]}
    ]
  }
}"#;
