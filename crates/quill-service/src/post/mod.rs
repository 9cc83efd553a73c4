//! Post operations guarded by ownership.

pub mod service;
pub mod validation;

pub use service::{PostService, PostView};
