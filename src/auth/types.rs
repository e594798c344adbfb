use super::password::StoredPassword;
use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A registered account. Held in memory only; the password field is the
/// salted hash, never the cleartext.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub nickname: String,
    pub age: Option<u32>,
    pub description: Option<String>,
    pub password: StoredPassword,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub age: Option<u32>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Response shape shared by the auth endpoints. `status` is a short
/// machine-readable outcome; `token` and `user_id` are set on success.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub status: String,
    pub token: Option<String>,
    pub user_id: Option<UserId>,
}
