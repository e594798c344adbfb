//! Catalog Module
//!
//! Book records and their in-memory storage.
//!
//! ## Overview
//! The catalog is seeded at startup from a JSON snapshot (the hand-off from
//! the persistence layer) and grows at runtime through the create endpoint.
//! The search index consumes the catalog as a plain `(id, title)` feed;
//! nothing in this module writes to the index.
//!
//! ## Responsibilities
//! - **Storage**: Concurrent keyed access to book records.
//! - **Identifiers**: Allocation that never collides with seeded ids.
//! - **Loading**: Parsing the startup snapshot.
//! - **API**: Create, fetch, and list endpoints.
//!
//! ## Submodules
//! - **`store`**: The `BookStore` in-memory map with id allocation.
//! - **`loader`**: Catalog snapshot parsing.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The `Book` record and API DTOs.

pub mod handlers;
pub mod loader;
pub mod store;
pub mod types;
