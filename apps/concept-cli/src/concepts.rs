//! Concept list assembly
//!
//! Concepts arrive as repeated `--concept` flags and/or lines of a
//! concepts file. Each entry is trimmed, blanks are dropped, and exact
//! duplicates fold to their first occurrence so the report has one column
//! per concept.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Build the final ordered concept list from both sources.
pub fn assemble_concepts(flag_values: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut raw: Vec<String> = flag_values.to_vec();

    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read concepts file {}", path.display()))?;
        raw.extend(content.lines().map(|line| line.to_string()));
    }

    let mut seen = HashSet::new();
    let concepts = raw
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .filter(|c| seen.insert(c.to_string()))
        .map(|c| c.to_string())
        .collect();

    Ok(concepts)
}
