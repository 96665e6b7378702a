//! Output formatting for generated schemas.
//!
//! Supports multiple output formats: SDL (the schema itself), JSON, and toon.
//! The JSON and toon renderings expose the compiled types and relationship
//! fields for tooling that wants the naming decisions without parsing SDL.

use clap::ValueEnum;
use serde::Serialize;

use crate::schema::GeneratedSchema;

/// Output format for generated schemas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GraphQL SDL
    #[default]
    Sdl,
    /// Compiled types as JSON
    Json,
    /// Compiled types in token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as the primary text rendering
    fn to_text(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Sdl => self.to_text(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default() + "\n",
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                let mut text = toon::encode(&json_value, None);
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                text
            }
        }
    }
}

impl Outputable for GeneratedSchema {
    fn to_text(&self) -> String {
        self.to_sdl()
    }
}
