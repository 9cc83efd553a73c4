//! Credential input validation.
//!
//! Violations accumulate into a list so the caller can report every broken
//! rule at once rather than failing on the first.

use quill_core::config::auth::AuthConfig;

/// The single generic message for every login failure. Using one string for
/// missing users and wrong passwords alike prevents username enumeration
/// through differential error text.
pub const INVALID_CREDENTIALS: &str = "Invalid username / password provided";

/// Validates registration input shape. Returns every violated rule.
///
/// Password rules are evaluated regardless of the username's state; the two
/// fields are independent.
pub fn validate_registration(username: &str, password: &str, config: &AuthConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if username.is_empty() {
        errors.push("Username is required".to_string());
    } else {
        if username.chars().count() < config.username_min_length {
            errors.push(format!(
                "Username must be at least {} characters",
                config.username_min_length
            ));
        }
        if username.chars().count() > config.username_max_length {
            errors.push(format!(
                "Username must be less than {} characters",
                config.username_max_length + 1
            ));
        }
        if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push("Username can only contain letters and numbers".to_string());
        }
    }

    if password.is_empty() {
        errors.push("Password is required".to_string());
    } else {
        if password.chars().count() < config.password_min_length {
            errors.push(format!(
                "Password must be at least {} characters",
                config.password_min_length
            ));
        }
        if password.chars().count() > config.password_max_length {
            errors.push(format!(
                "Password must be less than {} characters",
                config.password_max_length + 1
            ));
        }
    }

    errors
}

/// Validates login input shape. Any violation yields the one generic
/// credential message.
pub fn validate_login(username: &str, password: &str) -> Vec<String> {
    if username.trim().is_empty() || password.is_empty() {
        vec![INVALID_CREDENTIALS.to_string()]
    } else {
        Vec::new()
    }
}
