//! Credential store port.

use async_trait::async_trait;

use sweetshop_core::{DomainResult, UserId};

use crate::Role;

/// A persisted user account.
///
/// `password_hash` never leaves the auth boundary; response DTOs are built
/// from the other fields only. Accounts are created at registration and
/// never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Storage port for user accounts.
///
/// Username and email are each globally unique; `insert` must fail with
/// `DomainError::Conflict` when either is already taken, including when the
/// duplicate is only caught by the storage engine's unique constraint
/// (concurrent registrations).
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> DomainResult<()>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
}
