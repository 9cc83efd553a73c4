//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use quill_core::config::auth::AuthConfig;

use super::claims::{CLAIMS_VERSION, Claims};

/// Why a token failed verification.
///
/// The distinction exists for logging and tests only. Callers must treat
/// every variant identically: the bearer is unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token could not be parsed as a signed claims set.
    #[error("malformed token")]
    Malformed,
    /// The signature does not match the configured secret.
    #[error("invalid token signature")]
    InvalidSignature,
    /// The token's expiry has passed.
    #[error("expired token")]
    Expired,
    /// The claims layout version is not one this build understands.
    #[error("unsupported claims version {0}")]
    UnsupportedVersion(u32),
}

/// Validates session tokens.
#[derive(Clone)]
pub struct SessionDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for SessionDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No clock-skew leeway: `exp` is an exact boundary.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token.
    ///
    /// The signature is verified before the claims are deserialized, and the
    /// expiry is checked against the wall clock at call time. No claim field
    /// is readable from the error path.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        let claims = token_data.claims;
        if claims.ver != CLAIMS_VERSION {
            return Err(TokenError::UnsupportedVersion(claims.ver));
        }

        Ok(claims)
    }
}
