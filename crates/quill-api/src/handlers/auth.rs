//! Auth handlers — register, login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use quill_core::error::AppError;

use crate::cookie::{removal_cookie, session_cookie};
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse, UserResponse};
use crate::extractors::RequireAuth;
use crate::state::AppState;

/// POST /api/auth/register
///
/// Creates the account and logs the new user in: the response carries the
/// session cookie.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, (StatusCode, Json<ApiResponse<AuthResponse>>)), AppError> {
    let result = state
        .auth_service
        .register(&req.username, &req.password)
        .await?;

    let jar = jar.add(session_cookie(
        &state.config.auth,
        result.session.token.clone(),
    ));

    let body = ApiResponse::ok(AuthResponse {
        user: UserResponse::from(result.user),
        session_expires_at: result.session.expires_at,
    });

    Ok((jar, (StatusCode::CREATED, Json(body))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AuthResponse>>), AppError> {
    let result = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    let jar = jar.add(session_cookie(
        &state.config.auth,
        result.session.token.clone(),
    ));

    let body = ApiResponse::ok(AuthResponse {
        user: UserResponse::from(result.user),
        session_expires_at: result.session.expires_at,
    });

    Ok((jar, Json(body)))
}

/// POST /api/auth/logout
///
/// Clears the session cookie. Stateless tokens cannot be revoked
/// server-side; the cookie removal is the whole logout.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let jar = jar.add(removal_cookie(&state.config.auth));

    (
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: RequireAuth,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.auth_service.get_profile(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
