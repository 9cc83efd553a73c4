//! Request-scoped identity resolution.
//!
//! An [`Identity`] is `Authenticated` only if a structurally valid,
//! signature-verified, non-expired token produced it. Anything else is
//! `Anonymous` — there is no partial-trust state, and a bad or expired
//! cookie behaves exactly like no cookie.

use tracing::debug;

use crate::token::SessionDecoder;

/// The resolved identity of one request. Lives only for the duration of
/// that request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// A verified session token identified this user.
    Authenticated {
        /// The user's id.
        user_id: i64,
        /// The user's username at token issuance.
        username: String,
    },
    /// No cookie, or a cookie that failed verification.
    Anonymous,
}

impl Identity {
    /// Whether this identity is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The authenticated user id, if any.
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Self::Authenticated { user_id, .. } => Some(*user_id),
            Self::Anonymous => None,
        }
    }
}

/// Resolves an identity from the raw session cookie value.
///
/// Infallible by construction: verification failures are logged at debug and
/// swallowed here, never surfaced as request errors. Cheap and synchronous —
/// bounded by one signature verification, no I/O.
pub fn resolve_identity(cookie_value: Option<&str>, decoder: &SessionDecoder) -> Identity {
    let Some(token) = cookie_value else {
        return Identity::Anonymous;
    };

    match decoder.verify(token) {
        Ok(claims) => Identity::Authenticated {
            user_id: claims.sub,
            username: claims.username,
        },
        Err(reason) => {
            debug!(%reason, "session cookie failed verification");
            Identity::Anonymous
        }
    }
}
