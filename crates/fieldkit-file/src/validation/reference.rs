//! Reference-level validation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;
use crate::models::RefData;

/// Maximum length for a file reference.
pub const MAX_REF_LENGTH: usize = 255;

static REF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_\-\.:]+$").expect("reference pattern compiles"));

/// Validate a user-entered file reference.
///
/// Rules:
/// - Must be non-empty
/// - Maximum 255 characters
/// - Must match pattern: `^[a-zA-Z0-9_\-\.:]+$` (the colon keeps prefixed
///   forms like `s3:file:report.pdf` valid)
pub fn validate_ref(data: &RefData) -> Result<(), ValidationError> {
    let reference = &data.reference;

    if reference.is_empty() {
        return Err(ValidationError::EmptyRef);
    }

    if reference.len() > MAX_REF_LENGTH {
        return Err(ValidationError::RefTooLong);
    }

    if !REF_PATTERN.is_match(reference) {
        return Err(ValidationError::MalformedRef(reference.clone()));
    }

    Ok(())
}
