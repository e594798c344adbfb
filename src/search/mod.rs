//! Search Module
//!
//! The in-memory title search subsystem: tokenization, the id-to-token-set
//! index, and the HTTP endpoints that query and rebuild it.
//!
//! ## Overview
//! Book titles are reduced to sets of normalized tokens. The index maps each
//! book identifier to its title's token set and ranks candidates by how many
//! tokens they share with the query. It is built once at startup from the
//! full catalog snapshot; the only mutation afterwards is the administrative
//! full rebuild, which replaces the contents wholesale.
//!
//! ## Responsibilities
//! - **Tokenization**: Normalizing titles and queries into comparable token sets.
//! - **Ranking**: Scoring every indexed title by token overlap with the query.
//! - **Retrieval**: Hydrating ranked identifiers with catalog metadata.
//! - **API**: Exposing search and rebuild via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`index`**: The `SearchIndex` component (build, query, ranking).
//! - **`tokenizer`**: Text normalization into token sets.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod index;
pub mod tokenizer;
pub mod types;
