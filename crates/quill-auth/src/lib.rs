//! # quill-auth
//!
//! The session and authorization core for Quill:
//!
//! - [`password`] — Argon2id credential hashing and verification.
//! - [`token`] — signing and verifying the session token (JWT HS256).
//! - [`identity`] — resolving a request-scoped [`identity::Identity`] from
//!   the session cookie; every verification failure collapses to
//!   [`identity::Identity::Anonymous`].
//! - [`guard`] — pure allow/deny decisions for acting on owned resources.

pub mod guard;
pub mod identity;
pub mod password;
pub mod token;
