//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use quill_auth::token::SessionDecoder;
use quill_core::config::AppConfig;
use quill_service::auth::AuthService;
use quill_service::post::PostService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session token decoder; used by the identity extractor on every request.
    pub session_decoder: Arc<SessionDecoder>,
    /// Registration/login orchestration.
    pub auth_service: Arc<AuthService>,
    /// Post operations.
    pub post_service: Arc<PostService>,
}
