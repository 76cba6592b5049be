//! Input validation helpers
//!
//! Centralized validation for the two field families of the registry:
//! numeric identifiers (national ID, member number) and person names.
//! Every mutation entry point and the lookup parser run through these
//! before any repository call, so the validation contract stays uniform.
//! SQLite TEXT has no built-in length enforcement.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Person names (imported rolls carry long compound surnames)
pub const MAX_NAME_LEN: usize = 200;

/// Numeric identifiers: national ID, member number
pub const MAX_IDENTIFIER_LEN: usize = 20;

// ── Validation helpers ──────────────────────────────────────────────

/// Trim and validate a digits-only identifier.
///
/// Returns the trimmed value so callers persist the normalized form.
pub fn validate_identifier(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required_field(field));
    }
    if trimmed.len() > MAX_IDENTIFIER_LEN {
        return Err(AppError::invalid_format(
            field,
            format!(
                "{field} is too long ({} chars, max {MAX_IDENTIFIER_LEN})",
                trimmed.len()
            ),
        ));
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::invalid_format(
            field,
            format!("{field} must contain digits only"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim and validate a required name field.
pub fn validate_name(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required_field(field));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {MAX_NAME_LEN})",
            trimmed.len()
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional free-text field; blank collapses to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
