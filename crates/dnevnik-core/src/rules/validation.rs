use crate::errors::{RegisterError, Result};
use crate::model::NewStudent;

/// Reject a blank (empty or whitespace-only) required field
///
/// # Errors
/// Returns `ValidationError` naming `field` when `value` is blank.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegisterError::ValidationError {
            field: field.to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

/// Validate form input before a student is inserted
///
/// Only the first name is required. Last name and class may be empty.
///
/// # Errors
/// Returns `ValidationError` when the first name is blank.
pub fn validate_new_student(student: &NewStudent) -> Result<()> {
    validate_required("first_name", &student.first_name)
}
