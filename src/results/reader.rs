//! Result tree reader
//!
//! Loads a serialized result tree (JSON) from disk.

use std::path::Path;

use anyhow::{Context, Result};

use super::node::ResultNode;

/// Read the result tree stored at `path`.
///
/// # Errors
/// Returns an error if the file cannot be read or does not hold a valid
/// result tree (including unknown outcome values).
pub fn read_test_results<P: AsRef<Path>>(path: P) -> Result<ResultNode> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read test results: {}", path.display()))?;
    parse_test_results(&content)
        .with_context(|| format!("Failed to parse test results: {}", path.display()))
}

/// Parse a result tree from its JSON text.
pub fn parse_test_results(content: &str) -> Result<ResultNode> {
    let root: ResultNode = serde_json::from_str(content).context("Invalid result tree JSON")?;
    Ok(root)
}
