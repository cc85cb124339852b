use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    apis::api_models::{
        query::PaginationQuery,
        request::{CreateCommentRequest, UpdateCommentRequest},
        response::CommentResponse,
    },
    utils::errors::{AppError, ErrorPayload},
    AppState,
};

pub const TAG: &str = "comments";

#[utoipa::path(
    post,
    tag = TAG,
    path = "/",
    description = "Create a comment for an existing user",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Bad Request", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal Server Error", body = ErrorPayload),
    )
)]
pub(super) async fn create_comment(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let comment = app_state
        .comment_service
        .create_comment(payload.user_id, &payload.comment)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/",
    description = "List all comments, ordered by id",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Success", body = Vec<CommentResponse>),
        (status = 500, description = "Internal Server Error", body = ErrorPayload),
    )
)]
pub(super) async fn list_comments(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<PaginationQuery>,
) -> Result<(StatusCode, Json<Vec<CommentResponse>>), AppError> {
    let comments = app_state
        .comment_service
        .get_all_comments(query.limit, query.offset)
        .await?;

    Ok((
        StatusCode::OK,
        Json(comments.into_iter().map(CommentResponse::from).collect()),
    ))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}",
    responses(
        (status = 200, description = "Success", body = CommentResponse),
        (status = 404, description = "Not Found", body = ErrorPayload),
        (status = 500, description = "Internal Server Error", body = ErrorPayload),
    ),
    params(
        ("id" = i64, Path, description = "Comment ID")
    )
)]
pub(super) async fn get_comment(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let comment = app_state.comment_service.get_comment(id).await?;

    Ok((StatusCode::OK, Json(comment.into())))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/user/{user_id}",
    description = "List comments owned by a user, ordered by id",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        PaginationQuery,
    ),
    responses(
        (status = 200, description = "Success", body = Vec<CommentResponse>),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal Server Error", body = ErrorPayload),
    )
)]
pub(super) async fn list_user_comments(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Query(query): Query<PaginationQuery>,
) -> Result<(StatusCode, Json<Vec<CommentResponse>>), AppError> {
    let comments = app_state
        .comment_service
        .get_comments_by_user(user_id, query.limit, query.offset)
        .await?;

    Ok((
        StatusCode::OK,
        Json(comments.into_iter().map(CommentResponse::from).collect()),
    ))
}

#[utoipa::path(
    put,
    tag = TAG,
    path = "/{id}",
    description = "Update a comment's text; only its owner may do so",
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 404, description = "Not Found", body = ErrorPayload),
        (status = 500, description = "Internal Server Error", body = ErrorPayload),
    ),
    params(
        ("id" = i64, Path, description = "Comment ID")
    )
)]
pub(super) async fn update_comment(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let comment = app_state
        .comment_service
        .update_comment(id, payload.user_id, &payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(comment.into())))
}

#[utoipa::path(
    delete,
    tag = TAG,
    path = "/{id}",
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Not Found", body = ErrorPayload),
        (status = 500, description = "Internal Server Error", body = ErrorPayload),
    ),
    params(
        ("id" = i64, Path, description = "Comment ID")
    )
)]
pub(super) async fn delete_comment(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    app_state.comment_service.delete_comment(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
