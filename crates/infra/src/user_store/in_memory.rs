//! In-memory credential store (tests and DATABASE_URL-less runs).

use std::sync::Mutex;

use async_trait::async_trait;

use sweetshop_auth::{User, UserStore};
use sweetshop_core::{DomainError, DomainResult};

/// Vec-backed store guarded by one mutex; uniqueness is checked under the
/// same lock that inserts, so concurrent registrations cannot both win.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(DomainError::conflict("username or email already registered"));
        }
        users.push(user);
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}
