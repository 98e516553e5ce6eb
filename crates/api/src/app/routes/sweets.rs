use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};

use sweetshop_core::SweetId;
use sweetshop_inventory::{NewSweet, SweetPatch};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::CurrentUser;

pub async fn create_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<NewSweet>,
) -> axum::response::Response {
    match services.inventory.create(user.claims(), body).await {
        Ok(sweet) => (StatusCode::CREATED, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::domain_error_response(e),
    }
}

pub async fn list_sweets(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.inventory.list().await {
        Ok(sweets) => {
            let items = sweets.iter().map(dto::sweet_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::domain_error_response(e),
    }
}

pub async fn search_sweets(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    match services.inventory.search(query.into_filter()).await {
        Ok(sweets) => {
            let items = sweets.iter().map(dto::sweet_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::domain_error_response(e),
    }
}

pub async fn update_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<SweetPatch>,
) -> axum::response::Response {
    let id: SweetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_response(e),
    };

    match services.inventory.update(user.claims(), id, body).await {
        Ok(sweet) => (StatusCode::OK, Json(dto::sweet_to_json(&sweet))).into_response(),
        Err(e) => errors::domain_error_response(e),
    }
}

pub async fn delete_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SweetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_response(e),
    };

    match services.inventory.delete(user.claims(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_response(e),
    }
}
