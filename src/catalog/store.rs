use super::types::{Book, BookId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory book storage.
///
/// Books are keyed by identifier. Identifiers come from the startup snapshot
/// or from `next_id` for books created at runtime; the allocator always stays
/// ahead of the largest identifier it has seen, so seeded and created books
/// never collide.
pub struct BookStore {
    books: DashMap<BookId, Book>,
    next_id: AtomicI64,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Allocates the next free book identifier.
    pub fn next_id(&self) -> BookId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Inserts or replaces a book under its identifier.
    pub fn put(&self, book: Book) {
        self.next_id.fetch_max(book.id + 1, Ordering::SeqCst);
        self.books.insert(book.id, book);
    }

    pub fn get(&self, book_id: &BookId) -> Option<Book> {
        self.books.get(book_id).map(|entry| entry.value().clone())
    }

    /// All books, ordered by identifier.
    pub fn all(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self
            .books
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        books.sort_by_key(|book| book.id);
        books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
