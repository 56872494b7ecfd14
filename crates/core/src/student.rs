//! Student field rules.
//!
//! Only presence is checked here. Optional attributes (email, course, age)
//! are stored as given.

use crate::error::CoreError;

/// Entity label used in not-found errors and log fields.
pub const STUDENT_ENTITY: &str = "Student";

/// Validate that a student name is present and not just whitespace.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Field 'name' is required and must not be empty".to_string(),
        ));
    }
    Ok(())
}
