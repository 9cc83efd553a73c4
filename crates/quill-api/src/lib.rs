//! # quill-api
//!
//! HTTP API layer for Quill using Axum: routing, request-scoped identity
//! extraction from the session cookie, handlers, DTOs, and the mapping from
//! domain errors to HTTP responses.

pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
