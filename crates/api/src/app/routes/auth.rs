use std::sync::Arc;

use axum::{
    Form, Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::CurrentUser;

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    match services
        .authenticator
        .register(&body.username, &body.email, &body.password)
        .await
    {
        Ok(user) => (StatusCode::CREATED, Json(dto::user_to_json(&user))).into_response(),
        Err(e) => errors::domain_error_response(e),
    }
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Form(body): Form<dto::LoginForm>,
) -> axum::response::Response {
    match services
        .authenticator
        .login(&body.username, &body.password)
        .await
    {
        Ok(token) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "access_token": token,
                "token_type": "bearer",
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_response(e),
    }
}

pub async fn me(Extension(user): Extension<CurrentUser>) -> axum::response::Response {
    (StatusCode::OK, Json(dto::claims_to_json(user.claims()))).into_response()
}
