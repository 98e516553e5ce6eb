//! Auth runtime configuration, loaded once at startup.

use anyhow::Context;

/// Default provisioning allow-list (bootstrap admin accounts).
const DEFAULT_ADMIN_EMAILS: &str = "admin@example.com,admin@sweetshop.com";

const DEFAULT_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Process-wide auth configuration.
///
/// Immutable after startup. The signing secret has no fallback: the
/// process refuses to start without `SECRET_KEY`.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret.
    pub secret: String,

    /// Access token lifetime in minutes.
    pub token_expiry_minutes: i64,

    /// Lower-cased emails granted the admin role at registration.
    pub admin_emails: Vec<String>,
}

impl AuthConfig {
    /// Load from the environment: `SECRET_KEY` (required),
    /// `ACCESS_TOKEN_EXPIRE_MINUTES` (default 30), `ADMIN_EMAILS`
    /// (comma-separated, defaults to the bootstrap addresses).
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = std::env::var("SECRET_KEY").context("SECRET_KEY must be set")?;

        let token_expiry_minutes = match std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES") {
            Ok(raw) => raw
                .parse::<i64>()
                .context("ACCESS_TOKEN_EXPIRE_MINUTES must be an integer")?,
            Err(_) => DEFAULT_TOKEN_EXPIRY_MINUTES,
        };

        let raw_emails =
            std::env::var("ADMIN_EMAILS").unwrap_or_else(|_| DEFAULT_ADMIN_EMAILS.to_string());

        Ok(Self {
            secret,
            token_expiry_minutes,
            admin_emails: parse_admin_emails(&raw_emails),
        })
    }
}

fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
