//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring (Postgres when `DATABASE_URL` is set,
//!   in-memory otherwise)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use sweetshop_auth::{AuthConfig, TokenCodec};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: AuthConfig) -> anyhow::Result<Router> {
    let tokens = Arc::new(TokenCodec::new(
        config.secret.as_bytes(),
        config.token_expiry_minutes,
    ));
    let services = Arc::new(services::build_services(&config, Arc::clone(&tokens)).await?);

    Ok(build_router(services, tokens))
}

/// Assemble the router around already-built services.
///
/// Split out so tests can wire in-memory stores directly.
pub fn build_router(services: Arc<services::AppServices>, tokens: Arc<TokenCodec>) -> Router {
    let auth_state = middleware::AuthState { tokens };

    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    routes::public_router()
        .merge(protected)
        .layer(Extension(services))
}
