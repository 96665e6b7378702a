//! Relationship fact extraction.
//!
//! Normalizes both relationship encodings into a flat list of
//! [`RelationshipFact`]s, then indexes them per entity type so that each fact
//! is seen as OUT by its source and IN by its destination.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::model::{EdgeRecord, RelationshipDef, RelationshipSection};

/// Traversal direction of a relationship field, relative to its owning type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Out,
    In,
}

impl Direction {
    /// Sort rank: OUT before IN.
    pub fn rank(&self) -> u8 {
        match self {
            Direction::Out => 0,
            Direction::In => 1,
        }
    }

    /// Token used in the `@relationship` directive.
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Out => "OUT",
            Direction::In => "IN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One directed relationship between two entity types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipFact {
    pub label: String,
    pub source: String,
    pub destination: String,
}

impl RelationshipFact {
    pub fn new(
        label: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// A fact as seen from one of its endpoint types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedFact {
    pub label: String,
    /// The entity type at the other end
    pub peer: String,
    pub direction: Direction,
}

/// Extract facts from a relationship section, in document order.
///
/// Malformed entries (missing endpoints, empty label arrays, empty labels)
/// are dropped, not reported.
pub fn extract_facts(section: &RelationshipSection) -> Vec<RelationshipFact> {
    match section {
        RelationshipSection::Endpoints(defs) => defs.iter().flat_map(facts_from_def).collect(),
        RelationshipSection::Edges(edges) => edges.iter().filter_map(fact_from_edge).collect(),
    }
}

fn facts_from_def(def: &RelationshipDef) -> Vec<RelationshipFact> {
    def.ends
        .iter()
        .filter_map(|end| match (&end.source, &end.destination) {
            (Some(src), Some(dst)) if !src.is_empty() && !dst.is_empty() => {
                Some(RelationshipFact::new(&def.label, src, dst))
            }
            _ => {
                debug!(relationship = %def.label, "dropping relationship end without source or destination");
                None
            }
        })
        .collect()
}

fn fact_from_edge(edge: &EdgeRecord) -> Option<RelationshipFact> {
    let (Some(start), Some(end)) = (edge.start_labels.first(), edge.end_labels.first()) else {
        debug!(relationship = %edge.label, "dropping edge with empty start or end labels");
        return None;
    };
    if edge.label.is_empty() {
        debug!(start = %start, end = %end, "dropping edge without a relationship type");
        return None;
    }
    Some(RelationshipFact::new(&edge.label, start, end))
}

/// Directed facts grouped by the entity type they attach to.
#[derive(Debug, Clone, Default)]
pub struct FactIndex {
    by_entity: HashMap<String, Vec<DirectedFact>>,
    labels: Vec<String>,
}

impl FactIndex {
    /// Build the index, attaching OUT to each source and IN to each destination.
    ///
    /// Encounter order is preserved within each entity's list.
    pub fn from_facts(facts: &[RelationshipFact]) -> Self {
        let mut index = FactIndex::default();
        for fact in facts {
            index
                .by_entity
                .entry(fact.source.clone())
                .or_default()
                .push(DirectedFact {
                    label: fact.label.clone(),
                    peer: fact.destination.clone(),
                    direction: Direction::Out,
                });
            index
                .by_entity
                .entry(fact.destination.clone())
                .or_default()
                .push(DirectedFact {
                    label: fact.label.clone(),
                    peer: fact.source.clone(),
                    direction: Direction::In,
                });
            if !index.labels.contains(&fact.label) {
                index.labels.push(fact.label.clone());
            }
        }
        index
    }

    pub fn from_section(section: &RelationshipSection) -> Self {
        Self::from_facts(&extract_facts(section))
    }

    /// Directed facts attached to `entity`, in encounter order.
    pub fn facts_for(&self, entity: &str) -> &[DirectedFact] {
        self.by_entity.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct relationship labels in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Endpoint;
    use rstest::rstest;

    fn def(label: &str, ends: Vec<Endpoint>) -> RelationshipDef {
        RelationshipDef {
            label: label.to_string(),
            ends,
        }
    }

    fn edge(label: &str, start: &[&str], end: &[&str]) -> EdgeRecord {
        EdgeRecord {
            label: label.to_string(),
            start_labels: start.iter().map(|s| s.to_string()).collect(),
            end_labels: end.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[rstest]
    fn test_endpoints_expand_one_fact_per_pair() {
        let section = RelationshipSection::Endpoints(vec![def(
            "of_sample",
            vec![
                Endpoint::new("diagnosis", "sample"),
                Endpoint::new("sequencing_file", "sample"),
            ],
        )]);
        let facts = extract_facts(&section);
        assert_eq!(
            facts,
            vec![
                RelationshipFact::new("of_sample", "diagnosis", "sample"),
                RelationshipFact::new("of_sample", "sequencing_file", "sample"),
            ]
        );
    }

    #[rstest]
    fn test_definition_without_ends_contributes_nothing() {
        let section = RelationshipSection::Endpoints(vec![def("of_nothing", vec![])]);
        assert!(extract_facts(&section).is_empty());
    }

    #[rstest]
    fn test_endpoint_missing_side_is_dropped() {
        let section = RelationshipSection::Endpoints(vec![def(
            "of_study",
            vec![
                Endpoint {
                    source: Some("participant".to_string()),
                    destination: None,
                },
                Endpoint::new("participant", "study"),
            ],
        )]);
        assert_eq!(extract_facts(&section).len(), 1);
    }

    #[rstest]
    fn test_edges_use_first_label_and_drop_empty_arrays() {
        let section = RelationshipSection::Edges(vec![
            edge("OF_SAMPLE", &["diagnosis", "clinical"], &["sample"]),
            edge("BROKEN", &[], &["sample"]),
            edge("ALSO_BROKEN", &["sample"], &[]),
            edge("", &["sample"], &["study"]),
        ]);
        assert_eq!(
            extract_facts(&section),
            vec![RelationshipFact::new("OF_SAMPLE", "diagnosis", "sample")]
        );
    }

    #[rstest]
    fn test_index_attaches_both_directions() {
        let index = FactIndex::from_facts(&[RelationshipFact::new("of_sample", "diagnosis", "sample")]);

        assert_eq!(
            index.facts_for("diagnosis"),
            &[DirectedFact {
                label: "of_sample".to_string(),
                peer: "sample".to_string(),
                direction: Direction::Out,
            }]
        );
        assert_eq!(
            index.facts_for("sample"),
            &[DirectedFact {
                label: "of_sample".to_string(),
                peer: "diagnosis".to_string(),
                direction: Direction::In,
            }]
        );
        assert!(index.facts_for("study").is_empty());
    }

    #[rstest]
    fn test_self_relationship_attaches_out_and_in_to_same_type() {
        let index = FactIndex::from_facts(&[RelationshipFact::new("derived_from", "sample", "sample")]);
        let directions: Vec<_> = index.facts_for("sample").iter().map(|f| f.direction).collect();
        assert_eq!(directions, vec![Direction::Out, Direction::In]);
    }

    #[rstest]
    fn test_labels_are_distinct_in_first_seen_order() {
        let index = FactIndex::from_facts(&[
            RelationshipFact::new("of_study", "participant", "study"),
            RelationshipFact::new("of_sample", "diagnosis", "sample"),
            RelationshipFact::new("of_study", "sample", "study"),
        ]);
        assert_eq!(index.labels(), &["of_study".to_string(), "of_sample".to_string()]);
    }

    #[rstest]
    fn test_direction_tokens() {
        assert_eq!(Direction::Out.to_string(), "OUT");
        assert_eq!(Direction::In.to_string(), "IN");
        assert!(Direction::Out.rank() < Direction::In.rank());
    }
}
