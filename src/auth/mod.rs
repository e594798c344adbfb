//! Auth Module
//!
//! Accounts, password hashing, and bearer-token sessions.
//!
//! ## Overview
//! Sign-up enforces unique emails and nicknames, stores a salted PBKDF2 hash
//! of the password, and signs the new account in immediately. Sign-in trades
//! credentials for an opaque session token (30 days with `remember_me`, one
//! day otherwise); sign-out revokes it. Handlers that need an authenticated
//! caller read the token from the `Authorization` header.
//!
//! ## Responsibilities
//! - **Credentials**: One-way password storage and verification.
//! - **Accounts**: In-memory user records with uniqueness lookups.
//! - **Sessions**: Token issuance, validation, expiry, and revocation.
//! - **API**: Sign-up, sign-in, and sign-out endpoints.
//!
//! ## Submodules
//! - **`password`**: PBKDF2-HMAC-SHA256 derivation and verification.
//! - **`store`**: The `UserStore` in-memory account map.
//! - **`sessions`**: The `SessionStore` token registry.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The `User` record and API DTOs.

pub mod handlers;
pub mod password;
pub mod sessions;
pub mod store;
pub mod types;
