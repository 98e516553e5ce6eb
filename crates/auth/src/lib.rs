//! `sweetshop-auth` — authentication and authorization boundary.
//!
//! This crate owns user identity: the credential store port, password
//! hashing, token issue/validation, and the pure role policy. It is
//! intentionally decoupled from HTTP and storage.

pub mod authenticate;
pub mod authorize;
pub mod claims;
pub mod config;
pub mod password;
pub mod role;
pub mod store;
pub mod token;

pub use authenticate::Authenticator;
pub use authorize::{is_admin, require_admin};
pub use claims::Claims;
pub use config::AuthConfig;
pub use role::Role;
pub use store::{User, UserStore};
pub use token::TokenCodec;
