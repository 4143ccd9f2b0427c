//! Seed files for preloading a catalog.
//!
//! A seed file is a list of books in YAML (`.yaml`/`.yml`) or JSON (`.json`).
//! Borrowed state is never read from a seed; every seeded book starts
//! available.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::Book;

/// Read the books listed in a seed file
pub fn load_seed(path: &Path) -> Result<Vec<Book>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed JSON: {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse seed YAML: {}", path.display()))
    }
}
