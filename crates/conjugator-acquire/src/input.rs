use anyhow::{Context, Result};
use conjugator_model::Verb;
use std::fs;
use std::path::Path;

/// Read the verb list: one verb per line, in file order.
pub fn read_verbs(path: impl AsRef<Path>) -> Result<Vec<Verb>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    let verbs: Vec<Verb> = contents.lines().map(Verb::from_line).collect();
    tracing::info!(path = %path.display(), verbs = verbs.len(), "Read input verbs");
    Ok(verbs)
}
