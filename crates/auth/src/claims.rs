//! Identity claims embedded in access tokens.

use serde::{Deserialize, Serialize};

use crate::Role;

/// Claims carried by a signed access token.
///
/// Every field is required: a token missing any of them fails
/// deserialization and is treated as wholly invalid. Claims are issued by
/// the [`crate::TokenCodec`], owned by the client for the token's
/// lifetime, and never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account's username.
    pub sub: String,

    pub username: String,

    pub email: String,

    pub role: Role,

    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,

    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}
