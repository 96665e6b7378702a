//! Attribute type mapping.
//!
//! Maps an attribute's declared domain (or, when there is none, its name) to a
//! GraphQL scalar or list-of-scalar type.
//!
//! # Domain table
//!
//! | Domain | GraphQL |
//! |--------|---------|
//! | string, regexp, value_set, date, datetime | String |
//! | integer, int | Int |
//! | float, number, double | Float |
//! | boolean, bool | Boolean |
//! | list | `[<item>]` (item looked up in this table, String if absent) |
//!
//! Anything else maps to String.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Attribute, Domain};

/// A GraphQL built-in scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
}

impl ScalarType {
    /// Returns the GraphQL type name for this scalar.
    pub fn graphql_type(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::Boolean => "Boolean",
        }
    }

    /// Look up a domain name in the domain table (case-insensitive).
    pub fn from_domain(domain: &str) -> Option<Self> {
        let scalar = match domain.to_lowercase().as_str() {
            "string" | "regexp" | "value_set" | "date" | "datetime" => ScalarType::String,
            "integer" | "int" => ScalarType::Int,
            "float" | "number" | "double" => ScalarType::Float,
            "boolean" | "bool" => ScalarType::Boolean,
            _ => return None,
        };
        Some(scalar)
    }
}

/// The (always nullable) type of an emitted attribute field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum FieldType {
    Scalar(ScalarType),
    List(ScalarType),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(scalar) => write!(f, "{}", scalar.graphql_type()),
            FieldType::List(scalar) => write!(f, "[{}]", scalar.graphql_type()),
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.to_string()
    }
}

/// Map a declared domain to a field type. Never fails: unknown domains are String.
pub fn map_domain(domain: &Domain) -> FieldType {
    if domain.value.eq_ignore_ascii_case("list") {
        let item = domain
            .item
            .as_deref()
            .and_then(ScalarType::from_domain)
            .unwrap_or(ScalarType::String);
        return FieldType::List(item);
    }
    FieldType::Scalar(ScalarType::from_domain(&domain.value).unwrap_or(ScalarType::String))
}

/// How a name rule matches an attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePattern {
    Exact(String),
    Suffix(String),
    Prefix(String),
    Contains(String),
}

impl NamePattern {
    fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Exact(s) => name == s,
            NamePattern::Suffix(s) => name.ends_with(s.as_str()),
            NamePattern::Prefix(s) => name.starts_with(s.as_str()),
            NamePattern::Contains(s) => name.contains(s.as_str()),
        }
    }
}

/// One entry of the name inference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRule {
    #[serde(rename = "match")]
    pub pattern: NamePattern,

    #[serde(rename = "type")]
    pub scalar: ScalarType,
}

impl NameRule {
    pub fn new(pattern: NamePattern, scalar: ScalarType) -> Self {
        Self { pattern, scalar }
    }
}

/// Fragments suggesting a numeric attribute. Order is significant.
const NUMERIC_FRAGMENTS: &[&str] = &[
    "age_at_",
    "number_of_",
    "_count",
    "_size",
    "_length",
    "coverage",
    "avg_read_length",
    "number_of_bp",
    "number_of_reads",
    "vaf_numeric",
    "test_result_numeric",
    "passage_number",
    "magnetic_field_strength",
    "repetition_time",
    "echo_time",
    "inversion_time",
    "flip_angle",
    "pixel_spacing",
    "slice_thickness",
    "magnification",
    "participant_age_",
    "year_of_",
    "pack_years_",
    "years_",
    "cigarettes_per_day",
    "alcohol_days_per_week",
    "alcohol_drinks_per_day",
];

/// Ordered name inference table. The first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    rules: Vec<NameRule>,
}

impl NameRules {
    pub fn new(rules: Vec<NameRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[NameRule] {
        &self.rules
    }

    /// Infer a scalar from an attribute name, matched lowercased.
    pub fn infer(&self, name: &str) -> ScalarType {
        let lowered = name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(&lowered))
            .map(|rule| rule.scalar)
            .unwrap_or(ScalarType::String)
    }
}

impl Default for NameRules {
    /// Identifier rules, then numeric fragments, then boolean fragments.
    fn default() -> Self {
        let mut rules = vec![
            NameRule::new(NamePattern::Suffix("_id".to_string()), ScalarType::String),
            NameRule::new(NamePattern::Exact("id".to_string()), ScalarType::String),
        ];
        rules.extend(
            NUMERIC_FRAGMENTS
                .iter()
                .map(|f| NameRule::new(NamePattern::Contains(f.to_string()), ScalarType::Int)),
        );
        rules.extend([
            NameRule::new(NamePattern::Contains("indicator".to_string()), ScalarType::Boolean),
            NameRule::new(NamePattern::Contains("_flag".to_string()), ScalarType::Boolean),
            NameRule::new(NamePattern::Prefix("is_".to_string()), ScalarType::Boolean),
            NameRule::new(NamePattern::Prefix("has_".to_string()), ScalarType::Boolean),
        ]);
        Self { rules }
    }
}

/// Resolves attribute field types from domain metadata, falling back to names.
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    name_rules: NameRules,
}

impl TypeMapper {
    pub fn new(name_rules: NameRules) -> Self {
        Self { name_rules }
    }

    pub fn field_type(&self, attribute: &Attribute) -> FieldType {
        match &attribute.domain {
            Some(domain) => map_domain(domain),
            None => {
                let scalar = self.name_rules.infer(&attribute.name);
                debug!(attribute = %attribute.name, inferred = scalar.graphql_type(), "inferred attribute type from name");
                FieldType::Scalar(scalar)
            }
        }
    }
}
