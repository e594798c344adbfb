use super::tokenizer::tokenize;
use crate::catalog::types::BookId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle used by the HTTP layer: many concurrent readers, one
/// serialized writer for the administrative rebuild path.
pub type SharedIndex = Arc<RwLock<SearchIndex>>;

/// In-memory search index over book titles.
///
/// Maps every book identifier to the token set of its title. The index is
/// built from a full catalog snapshot and replaced wholesale on rebuild;
/// there are no per-book updates.
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: HashMap<BookId, HashSet<String>>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from `(id, title)` pairs, replacing any previous
    /// contents. A duplicate identifier in the feed keeps its last title.
    pub fn build<I, S>(&mut self, catalog: I)
    where
        I: IntoIterator<Item = (BookId, S)>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for (book_id, title) in catalog {
            entries.insert(book_id, tokenize(title.as_ref()));
        }
        self.entries = entries;

        tracing::debug!("Search index built with {} entries", self.entries.len());
    }

    /// Ranks indexed books against `search_text`.
    ///
    /// Every entry is scored by the number of tokens it shares with the
    /// query; zero-score entries are dropped and the rest are ordered by
    /// descending score, ties broken by ascending book id so the ranking is
    /// deterministic. Scores stay internal. An empty query, or an index that
    /// was never built, yields an empty list.
    pub fn query(&self, search_text: &str) -> Vec<BookId> {
        let query_tokens = tokenize(search_text);

        let mut scored: Vec<(BookId, usize)> = Vec::new();
        for (book_id, title_tokens) in &self.entries {
            let matching = query_tokens.intersection(title_tokens).count();
            if matching > 0 {
                scored.push((*book_id, matching));
            }
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.into_iter().map(|(book_id, _)| book_id).collect()
    }

    /// Number of books currently indexed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
