use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use sweetshop_auth::TokenCodec;

use crate::app::errors;
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenCodec>,
}

/// Validate the bearer token and attach the identity to the request.
///
/// Applied to every protected route; public routes (register, login,
/// catalog reads) never pass through here.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(token) => token,
        Err(resp) => return resp,
    };

    match state.tokens.verify(token) {
        Ok(claims) => {
            req.extensions_mut().insert(CurrentUser::new(claims));
            next.run(req).await
        }
        Err(_) => errors::unauthorized(),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(errors::unauthorized)?;

    let header = header.to_str().map_err(|_| errors::unauthorized())?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or_else(errors::unauthorized)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(errors::unauthorized());
    }

    Ok(token)
}
