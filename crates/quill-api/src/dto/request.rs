//! Request DTOs.
//!
//! Shape validation (lengths, required fields, accumulation of violations)
//! lives in the service layer, not in serde attributes, so every broken
//! rule is reported together.

use serde::{Deserialize, Serialize};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Create-post request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
}

/// Update-post request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    /// New title.
    pub title: String,
    /// New body.
    pub body: String,
}
