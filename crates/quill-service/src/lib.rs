//! # quill-service
//!
//! Business logic services for Quill. Orchestrates repositories and the
//! auth core: registration/login flows and ownership-guarded post
//! operations.

pub mod auth;
pub mod post;
