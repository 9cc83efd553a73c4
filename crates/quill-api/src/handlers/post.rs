//! Post handlers — dashboard listing, create, view, edit, delete.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use quill_core::error::AppError;
use quill_entity::post::UpdatePost;

use crate::dto::request::{CreatePostRequest, UpdatePostRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PostResponse, PostViewResponse};
use crate::extractors::RequireAuth;
use crate::state::AppState;

/// GET /api/posts — the caller's own posts, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, AppError> {
    let posts = state.post_service.list_own(&auth.identity()).await?;
    let posts = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(ApiResponse::ok(posts)))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: RequireAuth,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), AppError> {
    let post = state
        .post_service
        .create(&auth.identity(), &req.title, &req.body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(PostResponse::from(post))),
    ))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PostViewResponse>>, AppError> {
    let view = state.post_service.view(&auth.identity(), id).await?;
    Ok(Json(ApiResponse::ok(PostViewResponse::new(
        view.post,
        view.is_owner,
    ))))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<ApiResponse<PostResponse>>, AppError> {
    let post = state
        .post_service
        .update(
            &auth.identity(),
            id,
            UpdatePost {
                title: req.title,
                body: req.body,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(PostResponse::from(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: RequireAuth,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.post_service.delete(&auth.identity(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Post deleted".to_string(),
    })))
}
