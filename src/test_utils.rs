//! Shared test utilities for loader and CLI tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Create a temporary file with the given content and extension.
///
/// The extension matters: `.json` inputs are parsed with `serde_json`.
pub fn create_temp_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}
