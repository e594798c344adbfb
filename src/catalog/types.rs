use serde::{Deserialize, Serialize};

/// Unique key of a catalog entry. Assigned by the catalog (snapshot or the
/// id allocator), never by the search layer.
pub type BookId = i64;

/// A catalog entry as stored and served. Title and author are required;
/// the remaining fields mirror the optional parts of the submission form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub year: Option<u32>,
    pub grade: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub year: Option<u32>,
    pub grade: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBookResponse {
    pub book_id: BookId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub book: Option<Book>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookListResponse {
    pub count: usize,
    pub books: Vec<Book>,
}
