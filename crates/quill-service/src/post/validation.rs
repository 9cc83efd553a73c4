//! Post input validation.

/// Validates post input shape. Returns every violated rule.
///
/// The caller is expected to have trimmed both fields already; display
/// escaping is the renderer's concern, not this layer's.
pub fn validate_post(title: &str, body: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if title.is_empty() {
        errors.push("Title is required".to_string());
    }
    if body.is_empty() {
        errors.push("Body is required".to_string());
    }

    errors
}
