use axum::{
    Router,
    routing::{get, post, put},
};

pub mod auth;
pub mod inventory;
pub mod sweets;
pub mod system;

/// Routes reachable without a token: health, registration, login, and
/// catalog reads.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/sweets", get(sweets::list_sweets))
        .route("/api/sweets/search", get(sweets::search_sweets))
}

/// Routes behind the bearer-token middleware. Purchase only needs a valid
/// token; the rest additionally require the admin role (enforced in the
/// inventory service).
pub fn protected_router() -> Router {
    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/sweets", post(sweets::create_sweet))
        .route(
            "/api/sweets/:id",
            put(sweets::update_sweet).delete(sweets::delete_sweet),
        )
        .route("/api/sweets/:id/purchase", post(inventory::purchase_sweet))
        .route("/api/sweets/:id/restock", post(inventory::restock_sweet))
}
