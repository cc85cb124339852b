use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod api_models;
pub mod comment_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "comments", description = "Comment management API")
    )
)]
pub struct ApiDoc;

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let comment_router = OpenApiRouter::new()
        .routes(routes!(
            comment_handlers::create_comment,
            comment_handlers::list_comments
        ))
        .routes(routes!(
            comment_handlers::get_comment,
            comment_handlers::update_comment,
            comment_handlers::delete_comment
        ))
        .routes(routes!(comment_handlers::list_user_comments));

    let comment_router =
        OpenApiRouter::with_openapi(api_doc).nest("/comments", comment_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", comment_router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
        .route("/health", get(health_check))
}
