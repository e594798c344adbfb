use super::index::SharedIndex;
use super::types::{ReindexResponse, SearchResponse, SearchResultItem};
use crate::auth::handlers::bearer_token;
use crate::auth::sessions::SessionStore;
use crate::catalog::store::BookStore;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(index): Extension<SharedIndex>,
    Extension(books): Extension<Arc<BookStore>>,
) -> Json<SearchResponse> {
    let ranked = index.read().await.query(&params.q);

    // Resolve every ranked identifier first, in rank order, dropping ids the
    // store no longer knows; pagination then covers servable records only.
    let results: Vec<SearchResultItem> = ranked
        .into_iter()
        .filter_map(|book_id| books.get(&book_id))
        .map(|book| SearchResultItem {
            book_id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
        })
        .collect();

    let limit = params.limit.unwrap_or(10);
    let offset = params.offset.unwrap_or(0);
    let total_count = results.len();
    let results: Vec<SearchResultItem> = results.into_iter().skip(offset).take(limit).collect();

    tracing::debug!("Search '{}' matched {} books", params.q, total_count);

    Json(SearchResponse {
        query: params.q,
        total_count,
        count: results.len(),
        results,
    })
}

pub async fn handle_reindex(
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
    Extension(index): Extension<SharedIndex>,
    Extension(books): Extension<Arc<BookStore>>,
) -> (StatusCode, Json<ReindexResponse>) {
    let authorized = bearer_token(&headers)
        .and_then(|token| sessions.validate(token))
        .is_some();

    if !authorized {
        tracing::warn!("Rejected reindex request without a valid session");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ReindexResponse {
                status: "unauthorized".to_string(),
                indexed: 0,
            }),
        );
    }

    let catalog: Vec<_> = books
        .all()
        .into_iter()
        .map(|book| (book.id, book.title))
        .collect();

    let mut index = index.write().await;
    index.build(catalog);
    tracing::info!("Rebuilt search index over {} books", index.len());

    (
        StatusCode::OK,
        Json(ReindexResponse {
            status: "reindexed".to_string(),
            indexed: index.len(),
        }),
    )
}
