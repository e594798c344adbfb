//! Library Catalog Service Library
//!
//! This library crate defines the core modules that make up the catalog
//! service. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`auth`**: The account layer. Handles sign-up with uniqueness checks,
//!   salted PBKDF2 password storage, and bearer-token sessions with expiry.
//! - **`catalog`**: The book records layer. An in-memory store seeded from a
//!   JSON snapshot at startup, with create/fetch/list endpoints.
//! - **`search`**: The core information retrieval logic. Contains the
//!   tokenizer, the id-to-token-set index, and the overlap ranking that
//!   orders query results.

pub mod auth;
pub mod catalog;
pub mod search;
