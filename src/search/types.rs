use crate::catalog::types::BookId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

/// One ranked hit. Relevance is conveyed by position in the result list;
/// match scores never leave the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub year: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReindexResponse {
    pub status: String,
    pub indexed: usize,
}
