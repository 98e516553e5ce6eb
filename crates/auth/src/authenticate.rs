//! Registration and login against the credential store.

use std::sync::Arc;

use sweetshop_core::{DomainError, DomainResult, UserId};

use crate::{Role, TokenCodec, User, UserStore, password};

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const EMAIL_MAX: usize = 120;
const PASSWORD_MIN: usize = 8;

/// Verifies presented credentials against the store and issues tokens.
pub struct Authenticator {
    store: Arc<dyn UserStore>,
    tokens: Arc<TokenCodec>,
    admin_emails: Vec<String>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<TokenCodec>, admin_emails: Vec<String>) -> Self {
        Self {
            store,
            tokens,
            admin_emails: admin_emails.into_iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Register a new account.
    ///
    /// The role is `admin` iff the lower-cased email is on the provisioning
    /// allow-list; everyone else gets `user`. The plaintext password is
    /// hashed immediately and never stored or logged.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> DomainResult<User> {
        validate_username(username)?;
        validate_email(email)?;
        validate_password(password)?;

        if self.store.find_by_username(username).await?.is_some()
            || self.store.find_by_email(email).await?.is_some()
        {
            return Err(DomainError::conflict("username or email already registered"));
        }

        let role = if self.admin_emails.contains(&email.to_lowercase()) {
            Role::Admin
        } else {
            Role::User
        };

        let user = User {
            id: UserId::new(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password::hash_password(password)?,
            role,
        };

        // The pre-check above races with concurrent registrations; the
        // store maps its unique-constraint violation to the same conflict.
        self.store.insert(user.clone()).await?;

        tracing::info!(username, role = role.as_str(), "registered user");
        Ok(user)
    }

    /// Authenticate and issue a signed access token.
    ///
    /// The identifier is resolved as a username first, then as an email.
    /// Unknown identifier and wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, identifier: &str, password: &str) -> DomainResult<String> {
        let user = match self.store.find_by_username(identifier).await? {
            Some(user) => Some(user),
            None => self.store.find_by_email(identifier).await?,
        };

        let Some(user) = user else {
            return Err(DomainError::Authentication);
        };

        if !password::verify_password(password, &user.password_hash)? {
            return Err(DomainError::Authentication);
        }

        self.tokens.issue(&user)
    }
}

fn validate_username(username: &str) -> DomainResult<()> {
    let len = username.chars().count();
    if len < USERNAME_MIN || len > USERNAME_MAX {
        return Err(DomainError::validation(
            "username",
            format!("must be {USERNAME_MIN} to {USERNAME_MAX} characters"),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    let well_formed = email.chars().count() <= EMAIL_MAX
        && !email.contains(char::is_whitespace)
        && matches!(
            email.split_once('@'),
            Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        );

    if !well_formed {
        return Err(DomainError::validation("email", "must be a valid email address"));
    }
    Ok(())
}

fn validate_password(password: &str) -> DomainResult<()> {
    if password.chars().count() < PASSWORD_MIN {
        return Err(DomainError::validation(
            "password",
            format!("must be at least {PASSWORD_MIN} characters"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    /// Minimal map-backed store for exercising the authenticator.
    #[derive(Default)]
    struct MapStore {
        users: Mutex<HashMap<String, User>>,
    }

    #[async_trait]
    impl UserStore for MapStore {
        async fn insert(&self, user: User) -> DomainResult<()> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(&user.username)
                || users.values().any(|u| u.email == user.email)
            {
                return Err(DomainError::conflict("username or email already registered"));
            }
            users.insert(user.username.clone(), user);
            Ok(())
        }

        async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(username).cloned())
        }

        async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned())
        }
    }

    fn authenticator() -> Authenticator {
        Authenticator::new(
            Arc::new(MapStore::default()),
            Arc::new(TokenCodec::new(b"test-secret", 30)),
            vec!["admin@example.com".to_string()],
        )
    }

    #[tokio::test]
    async fn register_assigns_user_role_by_default() {
        let auth = authenticator();
        let user = auth
            .register("alice", "alice@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(user.role, Role::User);
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn register_grants_admin_from_allow_list_case_insensitively() {
        let auth = authenticator();
        let user = auth
            .register("boss", "Admin@Example.COM", "password123")
            .await
            .unwrap();
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let auth = authenticator();
        auth.register("alice", "alice@example.com", "password123")
            .await
            .unwrap();

        let err = auth
            .register("alice", "other@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let auth = authenticator();
        auth.register("alice", "alice@example.com", "password123")
            .await
            .unwrap();

        let err = auth
            .register("alice2", "alice@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn register_validates_fields() {
        let auth = authenticator();

        let err = auth.register("ab", "a@b.com", "password123").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "username"));

        let err = auth.register("alice", "not-an-email", "password123").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "email"));

        let err = auth.register("alice", "a@b.com", "short").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "password"));
    }

    #[tokio::test]
    async fn login_accepts_username_or_email() {
        let auth = authenticator();
        auth.register("alice", "alice@example.com", "password123")
            .await
            .unwrap();

        let by_username = auth.login("alice", "password123").await.unwrap();
        let by_email = auth.login("alice@example.com", "password123").await.unwrap();

        let codec = TokenCodec::new(b"test-secret", 30);
        let a = codec.verify(&by_username).unwrap();
        let b = codec.verify(&by_email).unwrap();
        assert_eq!(a.sub, "alice");
        assert_eq!(a.role, b.role);
    }

    #[tokio::test]
    async fn login_failure_is_generic() {
        let auth = authenticator();
        auth.register("alice", "alice@example.com", "password123")
            .await
            .unwrap();

        assert_eq!(
            auth.login("alice", "wrong-password").await.unwrap_err(),
            DomainError::Authentication
        );
        assert_eq!(
            auth.login("nobody", "password123").await.unwrap_err(),
            DomainError::Authentication
        );
    }
}
