//! Shared field validation helpers.
//!
//! Length limits are expressed in characters, matching the column limits
//! declared in the migrations. Each helper names the offending field in
//! the error message so callers can surface field-level failures.

use crate::error::CoreError;

/// Maximum length of stored file reference paths and URLs, matching the
/// `VARCHAR(500)` columns.
pub const MAX_PATH_LEN: usize = 500;

/// Ensure a required text field is present and non-blank.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

/// Ensure a text field does not exceed `max` characters.
pub fn max_chars(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )))
    } else {
        Ok(())
    }
}

/// Ensure a required text field is non-blank and within `max` characters.
pub fn require_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    require_non_blank(field, value)?;
    max_chars(field, value, max)
}

/// Validate an optional field's value if present.
pub fn optional_max_chars(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), CoreError> {
    match value {
        Some(v) => max_chars(field, v, max),
        None => Ok(()),
    }
}

/// Ensure a file path carries one of the allowed extensions
/// (case-insensitive, compared without the leading dot).
pub fn require_extension(
    field: &str,
    path: &str,
    allowed: &[&str],
) -> Result<(), CoreError> {
    let ext = path
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();
    if ext.is_empty() || !allowed.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "{field} must have one of the extensions: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
