//! Session token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use quill_core::config::auth::AuthConfig;
use quill_core::error::AppError;

use super::claims::{CLAIMS_VERSION, Claims};

/// Creates signed session tokens.
///
/// The signing secret is injected once at construction from configuration
/// and is immutable for the life of the process.
#[derive(Clone)]
pub struct SessionEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session TTL in seconds.
    ttl_seconds: i64,
}

impl std::fmt::Debug for SessionEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEncoder")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// A freshly minted session token with its expiry.
#[derive(Debug, Clone)]
pub struct SignedSession {
    /// The compact, URL-safe token string.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

impl SessionEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: config.session_ttl_seconds,
        }
    }

    /// Mints a session token for the given user.
    pub fn sign(&self, user_id: i64, username: &str) -> Result<SignedSession, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.ttl_seconds);

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            ver: CLAIMS_VERSION,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(SignedSession { token, expires_at })
    }
}
