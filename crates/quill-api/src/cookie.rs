//! Session cookie construction.
//!
//! The session artifact reaches the client as an HTTP-only, Secure,
//! SameSite=Strict cookie whose Max-Age matches the token TTL.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use quill_core::config::auth::AuthConfig;

/// Builds the session cookie carrying a freshly minted token.
pub fn session_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(config.session_ttl_seconds))
        .path("/")
        .build()
}

/// Builds a removal cookie that clears the session on the client.
pub fn removal_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO)
        .path("/")
        .build()
}
