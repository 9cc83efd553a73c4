//! Maps domain `AppError` to HTTP responses.
//!
//! `Authorization` and `NotFound` collapse to the same 404 body: a caller
//! probing someone else's post ids learns nothing about their existence.
//!
//! The `IntoResponse` impl itself lives in `quill-core` next to `AppError`
//! (the orphan rule forbids implementing the foreign trait for the foreign
//! type here); this module re-exports the response body type.

pub use quill_core::error::ApiErrorResponse;
