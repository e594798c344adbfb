use super::password::StoredPassword;
use super::types::{User, UserId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

/// Identity field a registration collided on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    Nickname,
}

/// In-memory account storage.
///
/// Accounts are keyed by id, with reservation maps over email and nickname.
/// `create` claims both identity fields atomically, so uniqueness holds even
/// when sign-ups for the same email or nickname race each other.
pub struct UserStore {
    users: DashMap<UserId, User>,
    emails: DashMap<String, UserId>,
    nicknames: DashMap<String, UserId>,
    next_id: AtomicI64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
            nicknames: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Registers an account and returns its freshly assigned id, or the
    /// identity field that was already taken.
    pub fn create(
        &self,
        email: String,
        nickname: String,
        age: Option<u32>,
        description: Option<String>,
        password: StoredPassword,
    ) -> Result<UserId, DuplicateField> {
        let user_id = self.next_id.fetch_add(1, Ordering::SeqCst);

        match self.emails.entry(email.clone()) {
            Entry::Occupied(_) => return Err(DuplicateField::Email),
            Entry::Vacant(slot) => {
                slot.insert(user_id);
            }
        }
        match self.nicknames.entry(nickname.clone()) {
            Entry::Occupied(_) => {
                // Release the email claimed above
                self.emails.remove(&email);
                return Err(DuplicateField::Nickname);
            }
            Entry::Vacant(slot) => {
                slot.insert(user_id);
            }
        }

        let user = User {
            id: user_id,
            email,
            nickname,
            age,
            description,
            password,
        };

        self.users.insert(user_id, user);
        Ok(user_id)
    }

    pub fn get(&self, user_id: &UserId) -> Option<User> {
        self.users.get(user_id).map(|entry| entry.value().clone())
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let user_id = self.emails.get(email).map(|entry| *entry.value())?;
        self.get(&user_id)
    }

    pub fn find_by_nickname(&self, nickname: &str) -> Option<User> {
        let user_id = self.nicknames.get(nickname).map(|entry| *entry.value())?;
        self.get(&user_id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
