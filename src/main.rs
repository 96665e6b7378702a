use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use data_model_graphql::cli::{Args, RunError};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    match args.execute() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.report(args.debug));
            ExitCode::from(RunError::EXIT_CODE)
        }
    }
}

/// Logs go to stderr so stdout carries only the schema.
fn init_tracing(debug: bool) {
    let default_directive = if debug {
        "data_model_graphql=debug"
    } else {
        "data_model_graphql=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
