//! Registration and login orchestration.

pub mod service;
pub mod validation;

pub use service::{AuthService, AuthenticatedUser};
pub use validation::INVALID_CREDENTIALS;
