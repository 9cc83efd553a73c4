//! Identity extractors — resolve the session cookie into an `Identity`
//! before any handler logic runs.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use quill_auth::identity::{Identity, resolve_identity};
use quill_core::error::AppError;

use crate::state::AppState;

/// The request's resolved identity, authenticated or not.
///
/// Extraction is infallible: a missing, malformed, tampered, or expired
/// cookie all resolve to `Identity::Anonymous`. Handlers that require a
/// login use [`RequireAuth`] instead.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie_value = jar
            .get(&state.config.auth.cookie_name)
            .map(|c| c.value().to_string());

        Ok(Self(resolve_identity(
            cookie_value.as_deref(),
            &state.session_decoder,
        )))
    }
}

/// An identity that is guaranteed authenticated; rejects with 401 otherwise.
///
/// This is the `mustBeLoggedIn` gate: the redirect-vs-reject policy lives
/// here, not in the identity resolution itself.
#[derive(Debug, Clone)]
pub struct RequireAuth {
    /// The authenticated user's id.
    pub user_id: i64,
    /// The authenticated user's username.
    pub username: String,
}

impl RequireAuth {
    /// The identity this gate admitted.
    pub fn identity(&self) -> Identity {
        Identity::Authenticated {
            user_id: self.user_id,
            username: self.username.clone(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = match CurrentIdentity::from_request_parts(parts, state).await {
            Ok(CurrentIdentity(identity)) => identity,
            Err(never) => match never {},
        };

        match identity {
            Identity::Authenticated { user_id, username } => Ok(Self { user_id, username }),
            Identity::Anonymous => Err(AppError::authentication("You must be logged in")),
        }
    }
}
