//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! The catalog itself is permissive by contract (no rating/duration
//! bounds); these helpers only guard required fields and pathological
//! input sizes.

use validator::ValidateEmail;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Movie titles
pub const MAX_TITLE_LEN: usize = 300;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Poster URLs
pub const MAX_URL_LEN: usize = 2048;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.len()
            )));
        }
    }
    Ok(())
}

/// Validate an email address shape and length.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    if value.len() > MAX_EMAIL_LEN || !value.validate_email() {
        return Err(AppError::validation("A valid email is required"));
    }
    Ok(())
}

/// Validate a plaintext password before hashing.
pub fn validate_password(value: &str) -> Result<(), AppError> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if value.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation("Password is too long"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("Dune", "Title", MAX_TITLE_LEN).is_ok());
        assert!(validate_required_text("", "Title", MAX_TITLE_LEN).is_err());
        assert!(validate_required_text("   ", "Title", MAX_TITLE_LEN).is_err());
    }

    #[test]
    fn required_text_enforces_length_cap() {
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(validate_required_text(&long, "Title", MAX_TITLE_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_absent_values() {
        assert!(validate_optional_text(&None, "Description", 10).is_ok());
        assert!(validate_optional_text(&Some("ok".into()), "Description", 10).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(11)), "Description", 10).is_err());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(validate_email("admin@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn password_length_is_bounded() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(MAX_PASSWORD_LEN + 1)).is_err());
    }
}
