use super::types::UserId;
use dashmap::DashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Lifetime of a session created without `remember_me`.
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24);
/// Lifetime of a `remember_me` session.
pub const REMEMBER_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 30);

#[derive(Debug, Clone)]
struct Session {
    user_id: UserId,
    expires_at_ms: u64,
}

/// Bearer-token session registry. Tokens are opaque UUIDs; expired entries
/// are dropped when they are next looked up, and swept whenever a new
/// session is opened.
pub struct SessionStore {
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Opens a session for `user_id` and returns its token. Sessions that
    /// expired without ever being revoked or revalidated are dropped here,
    /// so the registry does not grow past the set of live tokens.
    pub fn create(&self, user_id: UserId, ttl: Duration) -> String {
        let now = now_ms();
        self.sessions.retain(|_, session| now < session.expires_at_ms);

        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            expires_at_ms: now + ttl.as_millis() as u64,
        };

        self.sessions.insert(token.clone(), session);
        tracing::debug!("Opened session for user {}", user_id);
        token
    }

    /// Resolves a token to its account, removing the session if it expired.
    pub fn validate(&self, token: &str) -> Option<UserId> {
        let expired = match self.sessions.get(token) {
            Some(entry) => {
                if now_ms() < entry.value().expires_at_ms {
                    return Some(entry.value().user_id);
                }
                true
            }
            None => false,
        };

        // The read guard is gone by now, so the removal cannot deadlock.
        if expired {
            self.sessions.remove(token);
        }
        None
    }

    /// Ends a session. Returns whether the token was known.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
