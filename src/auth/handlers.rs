use super::password::{hash_password, verify_password};
use super::sessions::{REMEMBER_TTL, SESSION_TTL, SessionStore};
use super::store::{DuplicateField, UserStore};
use super::types::{AuthResponse, SignInRequest, SignUpRequest};
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};
use std::sync::Arc;

/// Pulls the token out of an `Authorization: Bearer ...` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

fn status_only(status: &str) -> Json<AuthResponse> {
    Json(AuthResponse {
        status: status.to_string(),
        token: None,
        user_id: None,
    })
}

pub async fn handle_sign_up(
    Extension(users): Extension<Arc<UserStore>>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    Json(req): Json<SignUpRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    // Fast-path rejections before the password is hashed. The store reserves
    // both identity fields atomically, so a sign-up racing past these checks
    // still cannot register a duplicate.
    if users.find_by_email(&req.email).is_some() {
        tracing::debug!("Sign-up rejected: email already taken");
        return (StatusCode::CONFLICT, status_only("duplicate_email"));
    }
    if users.find_by_nickname(&req.nickname).is_some() {
        tracing::debug!("Sign-up rejected: nickname already taken");
        return (StatusCode::CONFLICT, status_only("duplicate_nickname"));
    }

    let password = hash_password(&req.password);
    let user_id = match users.create(req.email, req.nickname, req.age, req.description, password) {
        Ok(user_id) => user_id,
        Err(DuplicateField::Email) => {
            tracing::debug!("Sign-up rejected: email already taken");
            return (StatusCode::CONFLICT, status_only("duplicate_email"));
        }
        Err(DuplicateField::Nickname) => {
            tracing::debug!("Sign-up rejected: nickname already taken");
            return (StatusCode::CONFLICT, status_only("duplicate_nickname"));
        }
    };

    // Signing up also signs the new account in
    let token = sessions.create(user_id, SESSION_TTL);
    tracing::info!("Registered user {}", user_id);

    (
        StatusCode::CREATED,
        Json(AuthResponse {
            status: "created".to_string(),
            token: Some(token),
            user_id: Some(user_id),
        }),
    )
}

pub async fn handle_sign_in(
    Extension(users): Extension<Arc<UserStore>>,
    Extension(sessions): Extension<Arc<SessionStore>>,
    Json(req): Json<SignInRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    // Unknown email and wrong password produce the same response, so the
    // endpoint does not reveal which emails are registered.
    let user = match users.find_by_email(&req.email) {
        Some(user) if verify_password(&user.password, &req.password) => user,
        _ => {
            tracing::debug!("Sign-in rejected: invalid credentials");
            return (StatusCode::UNAUTHORIZED, status_only("invalid_credentials"));
        }
    };

    let ttl = if req.remember_me {
        REMEMBER_TTL
    } else {
        SESSION_TTL
    };
    let token = sessions.create(user.id, ttl);
    tracing::debug!("User {} signed in", user.id);

    (
        StatusCode::OK,
        Json(AuthResponse {
            status: "signed_in".to_string(),
            token: Some(token),
            user_id: Some(user.id),
        }),
    )
}

pub async fn handle_sign_out(
    headers: HeaderMap,
    Extension(sessions): Extension<Arc<SessionStore>>,
) -> (StatusCode, Json<AuthResponse>) {
    let token = match bearer_token(&headers) {
        Some(token) => token,
        None => return (StatusCode::UNAUTHORIZED, status_only("missing_token")),
    };

    if sessions.revoke(token) {
        (StatusCode::OK, status_only("signed_out"))
    } else {
        (StatusCode::UNAUTHORIZED, status_only("invalid_token"))
    }
}
