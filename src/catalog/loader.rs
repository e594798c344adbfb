use super::types::Book;
use anyhow::{Context, Result};
use std::path::Path;

/// Reads a catalog snapshot: a JSON array of books written out by the
/// persistence layer for this service to serve from memory.
pub fn load_catalog(path: &Path) -> Result<Vec<Book>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog snapshot {}", path.display()))?;

    let books: Vec<Book> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog snapshot {}", path.display()))?;

    tracing::debug!("Parsed {} books from {}", books.len(), path.display());
    Ok(books)
}
