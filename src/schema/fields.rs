//! Relationship field compiler.
//!
//! Turns the directed facts attached to one entity type into the ordered,
//! duplicate-free list of relationship fields emitted on that type.
//!
//! # Policies
//!
//! | | [`CollisionPolicy::Drop`] | [`CollisionPolicy::Suffix`] |
//! |---|---|---|
//! | OUT name | `pluralize(destination)` | `singularize(destination)_label` |
//! | IN name | `pluralize(self)` | `singularize(self)_label` |
//! | collision | later fact dropped | `name_2`, `name_3`, ... |
//! | order | OUT then IN, acceptance order | (direction, name) |
//!
//! Under both policies OUT facts are processed before IN facts, so an OUT
//! field always keeps a contested name. Self relationships are never
//! pluralized under `Drop`.

use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::schema::facts::{DirectedFact, Direction};
use crate::schema::inflect::{pluralize, sanitize_field_name, singularize};
use crate::schema::names::NameSet;

/// How colliding candidate field names are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Name fields after the pluralized type; drop later collisions
    #[default]
    Drop,
    /// Name fields `<type>_<label>`; number later collisions
    Suffix,
}

/// Where the `@relationship(type: ...)` value comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSource {
    /// The fact's own label, uppercased
    #[default]
    Fact,
    /// Re-derived from the trailing segment of the field name (lossy)
    Recovered,
}

/// A relationship field ready for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledField {
    pub name: String,
    pub target: String,
    pub direction: Direction,
    pub label: String,
}

/// Compiles directed facts into relationship fields.
#[derive(Debug, Clone)]
pub struct FieldCompiler<'a> {
    policy: CollisionPolicy,
    label_source: LabelSource,
    known_labels: &'a [String],
}

impl<'a> FieldCompiler<'a> {
    /// `known_labels` is only consulted for [`LabelSource::Recovered`].
    pub fn new(policy: CollisionPolicy, label_source: LabelSource, known_labels: &'a [String]) -> Self {
        Self {
            policy,
            label_source,
            known_labels,
        }
    }

    /// Compile the fields of `entity` from the facts attached to it.
    pub fn compile(&self, entity: &str, facts: &[DirectedFact]) -> Vec<CompiledField> {
        match self.policy {
            CollisionPolicy::Drop => self.compile_dropping(entity, facts),
            CollisionPolicy::Suffix => {
                let mut fields = self.compile_suffixing(entity, facts);
                fields.sort_by(|a, b| {
                    (a.direction.rank(), &a.name).cmp(&(b.direction.rank(), &b.name))
                });
                fields
            }
        }
    }

    fn compile_dropping(&self, entity: &str, facts: &[DirectedFact]) -> Vec<CompiledField> {
        let mut names = NameSet::new();
        let mut fields = Vec::new();

        for fact in out_then_in(facts) {
            let name = self.candidate_name(entity, fact);
            if !names.claim(&name) {
                debug!(
                    entity,
                    field = %name,
                    relationship = %fact.label,
                    direction = %fact.direction,
                    "dropping relationship field with a name already in use"
                );
                continue;
            }
            fields.push(self.build_field(name, fact));
        }

        fields
    }

    fn compile_suffixing(&self, entity: &str, facts: &[DirectedFact]) -> Vec<CompiledField> {
        let mut names = NameSet::new();
        let mut occurrences: HashMap<String, usize> = HashMap::new();
        let mut fields = Vec::new();

        for fact in out_then_in(facts) {
            let base = self.candidate_name(entity, fact);
            let count = occurrences.entry(base.clone()).or_insert(0);
            *count += 1;

            // A suffixed name can clash with another fact's base name.
            let name = names.claim_numbered(&base, *count);

            if name != base {
                debug!(entity, field = %name, base = %base, "renamed colliding relationship field");
            }
            fields.push(self.build_field(name, fact));
        }

        fields
    }

    fn candidate_name(&self, entity: &str, fact: &DirectedFact) -> String {
        let subject = match fact.direction {
            Direction::Out => fact.peer.as_str(),
            Direction::In => entity,
        };

        let raw = match self.policy {
            CollisionPolicy::Drop if fact.peer == entity => subject.to_string(),
            CollisionPolicy::Drop => pluralize(subject),
            CollisionPolicy::Suffix => format!(
                "{}_{}",
                singularize(subject).to_lowercase(),
                fact.label.to_lowercase()
            ),
        };

        sanitize_field_name(&raw)
    }

    fn build_field(&self, name: String, fact: &DirectedFact) -> CompiledField {
        let label = self.resolve_label(&name, fact);
        CompiledField {
            name,
            target: fact.peer.clone(),
            direction: fact.direction,
            label,
        }
    }

    fn resolve_label(&self, name: &str, fact: &DirectedFact) -> String {
        let own = fact.label.to_uppercase();
        match self.label_source {
            LabelSource::Fact => own,
            LabelSource::Recovered => {
                let recovered = recover_label(name, self.known_labels);
                if recovered != own {
                    warn!(
                        field = name,
                        recovered = %recovered,
                        actual = %own,
                        "relationship label recovered from field name does not match its fact"
                    );
                }
                recovered
            }
        }
    }
}

/// OUT facts in encounter order, then IN facts in encounter order.
fn out_then_in(facts: &[DirectedFact]) -> impl Iterator<Item = &DirectedFact> {
    let outgoing = facts.iter().filter(|f| f.direction == Direction::Out);
    let incoming = facts.iter().filter(|f| f.direction == Direction::In);
    outgoing.chain(incoming)
}

/// Recover a relationship label from a compiled field name.
///
/// Takes the segment after the last `_`, returns the first known label equal
/// to it (case-insensitive) uppercased, or the segment itself uppercased.
/// Labels containing `_` can never be recovered exactly.
pub fn recover_label(field_name: &str, known_labels: &[String]) -> String {
    let segment = field_name.rsplit('_').next().unwrap_or(field_name);
    known_labels
        .iter()
        .find(|label| label.eq_ignore_ascii_case(segment))
        .map(|label| label.to_uppercase())
        .unwrap_or_else(|| segment.to_uppercase())
}
