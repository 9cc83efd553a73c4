//! Session token claims structure.

use serde::{Deserialize, Serialize};

/// Current claims layout version. Tokens minted with a different version
/// fail verification, which gives re-hashing or claim-shape changes a clean
/// cutover: old cookies simply become anonymous.
pub const CLAIMS_VERSION: u32 = 1;

/// Claims payload embedded in every session token.
///
/// The full set is constructed fresh per login/registration and signed
/// verbatim; no field is trusted until the signature and expiry have both
/// been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: i64,
    /// Username at the time of token issuance.
    pub username: String,
    /// Issued-at timestamp (seconds since epoch). Embedded so repeated
    /// sign calls for the same user produce distinct tokens.
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch); always `iat` + the
    /// configured TTL.
    pub exp: i64,
    /// Claims layout version tag.
    pub ver: u32,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> i64 {
        self.sub
    }
}
