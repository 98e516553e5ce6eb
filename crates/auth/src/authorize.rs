//! Pure authorization policy.
//!
//! Maps (claims, action) to allow/deny based solely on role. No IO, no
//! business logic; callers enforce this **before** touching the ledger.

use sweetshop_core::{DomainError, DomainResult};

use crate::{Claims, Role};

/// True iff the claims carry the admin role.
pub fn is_admin(claims: &Claims) -> bool {
    match claims.role {
        Role::Admin => true,
        Role::User => false,
    }
}

/// Require the admin role, rejecting valid non-admin identities.
pub fn require_admin(claims: &Claims) -> DomainResult<()> {
    match claims.role {
        Role::Admin => Ok(()),
        Role::User => Err(DomainError::Forbidden),
    }
}
