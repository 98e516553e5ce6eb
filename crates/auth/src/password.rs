//! Password hashing.

use sweetshop_core::{DomainError, DomainResult};

/// Hash a plaintext password with bcrypt (salted, deliberately slow).
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| DomainError::storage(format!("password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| DomainError::storage(format!("password verification failed: {e}")))
}
