//! Health check handler.

use axum::Json;
use axum::extract::State;

use quill_core::error::AppError;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/health — verifies database connectivity.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    quill_database::connection::health_check(&state.db_pool).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "ok".to_string(),
    })))
}
