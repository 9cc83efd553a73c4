//! Session token codec.
//!
//! Signs a claims set into an opaque, URL-safe token and verifies it back.
//! Signature validation happens before any claim value is trusted; a token
//! that fails for any reason is worth nothing more than no token at all.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{CLAIMS_VERSION, Claims};
pub use decoder::{SessionDecoder, TokenError};
pub use encoder::{SessionEncoder, SignedSession};
