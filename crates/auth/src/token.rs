//! Access token issue and validation (HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use sweetshop_core::{DomainError, DomainResult};

use crate::{Claims, User};

/// Signs and validates access tokens with a process-wide HS256 secret.
///
/// The trust model is stateless: there is no revocation list, so a validly
/// signed, unexpired token is always accepted. The expiry window is the
/// only mitigation for a leaked token; anyone needing revocation must add
/// an explicit denylist collaborator in front of [`TokenCodec::verify`].
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry: Duration,
}

impl TokenCodec {
    pub fn new(secret: &[u8], expiry_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            expiry: Duration::minutes(expiry_minutes),
        }
    }

    /// Issue a signed token for an authenticated user.
    pub fn issue(&self, user: &User) -> DomainResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.username.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| DomainError::storage(format!("token signing failed: {e}")))
    }

    /// Verify signature and expiry, yielding the embedded claims.
    ///
    /// Bad signature, expired, malformed, or missing any required claim
    /// field all collapse into the same generic authentication error.
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        // A token is invalid at its exact expiry instant.
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "rejected bearer token");
                DomainError::Authentication
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetshop_core::UserId;

    use crate::Role;

    fn user(role: Role) -> User {
        User {
            id: UserId::new(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$12$unused".to_string(),
            role,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let codec = TokenCodec::new(b"test-secret", 30);
        let token = codec.issue(&user(Role::Admin)).unwrap();

        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = TokenCodec::new(b"secret-a", 30);
        let verifier = TokenCodec::new(b"secret-b", 30);

        let token = issuer.issue(&user(Role::User)).unwrap();
        assert_eq!(verifier.verify(&token).unwrap_err(), DomainError::Authentication);
    }

    #[test]
    fn rejects_expired_token() {
        let codec = TokenCodec::new(b"test-secret", -10);
        let token = codec.issue(&user(Role::User)).unwrap();
        assert_eq!(codec.verify(&token).unwrap_err(), DomainError::Authentication);
    }

    #[test]
    fn rejects_tampered_token() {
        let codec = TokenCodec::new(b"test-secret", 30);
        let mut token = codec.issue(&user(Role::User)).unwrap();
        token.push('x');
        assert_eq!(codec.verify(&token).unwrap_err(), DomainError::Authentication);
    }

    #[test]
    fn rejects_token_with_missing_claims() {
        // Signed with the right key but lacking username/email/role.
        let partial = serde_json::json!({
            "sub": "alice",
            "iat": Utc::now().timestamp(),
            "exp": (Utc::now() + Duration::minutes(5)).timestamp(),
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &partial,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let codec = TokenCodec::new(b"test-secret", 30);
        assert_eq!(codec.verify(&token).unwrap_err(), DomainError::Authentication);
    }
}
