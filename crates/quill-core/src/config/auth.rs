//! Authentication and session configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication, token, and credential policy configuration.
///
/// `jwt_secret` has no default on purpose: a process without a signing
/// secret must fail at startup, not at the first login. Unknown keys are
/// rejected so a misspelled policy key fails loudly instead of silently
/// falling back to the field default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Session token TTL in seconds.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: i64,
    /// Name of the session cookie handed to clients.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie carries the Secure attribute.
    #[serde(default = "default_true")]
    pub cookie_secure: bool,
    /// Minimum username length.
    #[serde(default = "default_username_min")]
    pub username_min_length: usize,
    /// Maximum username length.
    #[serde(default = "default_username_max")]
    pub username_max_length: usize,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
}

impl AuthConfig {
    /// Rejects configurations that would leave the process unable to sign
    /// or verify session tokens.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set to a non-empty value",
            ));
        }
        if self.session_ttl_seconds <= 0 {
            return Err(AppError::configuration(
                "auth.session_ttl_seconds must be positive",
            ));
        }
        Ok(())
    }
}

fn default_session_ttl() -> i64 {
    86400
}

fn default_cookie_name() -> String {
    "OurSUperApp".to_string()
}

fn default_true() -> bool {
    true
}

fn default_username_min() -> usize {
    3
}

fn default_username_max() -> usize {
    10
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    70
}
