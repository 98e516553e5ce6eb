use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use sweetshop_core::SweetId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::CurrentUser;

pub async fn purchase_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id: SweetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_response(e),
    };

    match services
        .inventory
        .purchase(user.claims(), id, body.quantity)
        .await
    {
        Ok(new_quantity) => stock_response(new_quantity),
        Err(e) => errors::domain_error_response(e),
    }
}

pub async fn restock_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<dto::QuantityRequest>,
) -> axum::response::Response {
    let id: SweetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_response(e),
    };

    match services
        .inventory
        .restock(user.claims(), id, body.quantity)
        .await
    {
        Ok(new_quantity) => stock_response(new_quantity),
        Err(e) => errors::domain_error_response(e),
    }
}

fn stock_response(new_quantity: i64) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "new_quantity": new_quantity,
        })),
    )
        .into_response()
}
