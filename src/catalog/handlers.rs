use super::store::BookStore;
use super::types::{
    Book, BookId, BookListResponse, BookResponse, CreateBookRequest, CreateBookResponse,
};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_create_book(
    Extension(books): Extension<Arc<BookStore>>,
    Json(req): Json<CreateBookRequest>,
) -> (StatusCode, Json<CreateBookResponse>) {
    let book_id = books.next_id();
    let book = Book {
        id: book_id,
        title: req.title,
        author: req.author,
        description: req.description,
        year: req.year,
        grade: req.grade,
    };

    books.put(book);
    tracing::debug!("Created book {}", book_id);

    // The search index is built from catalog snapshots; a freshly created
    // book becomes searchable after the next rebuild.
    (StatusCode::CREATED, Json(CreateBookResponse { book_id }))
}

pub async fn handle_get_book(
    Extension(books): Extension<Arc<BookStore>>,
    Path(book_id): Path<BookId>,
) -> (StatusCode, Json<BookResponse>) {
    match books.get(&book_id) {
        Some(book) => (StatusCode::OK, Json(BookResponse { book: Some(book) })),
        None => (StatusCode::NOT_FOUND, Json(BookResponse { book: None })),
    }
}

pub async fn handle_list_books(
    Extension(books): Extension<Arc<BookStore>>,
) -> Json<BookListResponse> {
    let books = books.all();

    Json(BookListResponse {
        count: books.len(),
        books,
    })
}
