//! CLI argument definitions and the top-level run.

use std::error::Error as _;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, ConfigFile};
use crate::loader::{load_model, LoadError};
use crate::output::{OutputFormat, Outputable};
use crate::schema::{generate, CollisionPolicy, GenerateError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Examples:
  data_model_graphql model.yml model-props.yml > schema.graphql
  data_model_graphql --policy suffix model.yml model-props.yml
  data_model_graphql memgraph-schema.json
  data_model_graphql --format json model.yml model-props.yml")]
pub struct Args {
    /// Input documents: MDF model and props YAML (merged left to right),
    /// or a single Memgraph schema JSON
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// On failure, print the full error chain in addition to the message
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Field name collision policy (overrides the config file)
    #[arg(long, value_enum)]
    pub policy: Option<CollisionPolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Sdl)]
    pub format: OutputFormat,

    /// Path to a JSON config file (default: ./.data_model_graphql.json if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Error loading configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Error loading model: {0}")]
    Load(#[from] LoadError),

    #[error("Error generating schema: {0}")]
    Generate(#[from] GenerateError),
}

impl RunError {
    /// Process exit status for any failed run.
    pub const EXIT_CODE: u8 = 1;

    fn phase(&self) -> &'static str {
        match self {
            RunError::Config(_) => "loading configuration",
            RunError::Load(_) => "loading model",
            RunError::Generate(_) => "generating schema",
        }
    }

    /// Render the failure for stderr.
    ///
    /// Always ends with the one-line message. With `debug`, a dump of the
    /// error and its numbered cause chain come first.
    pub fn report(&self, debug: bool) -> String {
        let mut lines = Vec::new();
        if debug {
            lines.push(format!("[DEBUG] Error while {}:", self.phase()));
            lines.push(format!("{:#?}", self));
            let mut source = self.source();
            let mut depth = 0;
            while let Some(cause) = source {
                depth += 1;
                lines.push(format!("  {}: {}", depth, cause));
                source = cause.source();
            }
        }
        lines.push(self.to_string());
        lines.join("\n")
    }
}

impl Args {
    /// Load config and model, generate, and return the formatted output.
    pub fn execute(&self) -> Result<String, RunError> {
        let config = ConfigFile::load(self.config.as_deref())?;
        let mut options = config.generator.to_options();
        if let Some(policy) = self.policy {
            options.policy = policy;
        }

        let model = load_model(&self.files)?;
        info!(
            entities = model.entities.len(),
            policy = ?options.policy,
            "loaded model"
        );

        let schema = generate(&model, &options)?;
        Ok(schema.format(self.format))
    }
}
