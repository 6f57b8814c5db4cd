//! Field-level checks applied to mutation arguments before any database call.

use crate::gql::error::GqlError;

pub const TEAM_NAME_MAX_LEN: usize = 100;
pub const PERSON_NAME_MAX_LEN: usize = 50;

/// Require `value` to contain a non-whitespace character and fit in `max_len` characters.
/// The value is returned unchanged.
pub fn required_text(field: &str, value: String, max_len: usize) -> Result<String, GqlError> {
    if value.trim().is_empty() {
        return Err(GqlError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(GqlError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(value)
}

pub fn optional_text(
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Result<Option<String>, GqlError> {
    value.map(|v| required_text(field, v, max_len)).transpose()
}

pub fn non_negative(field: &str, value: i32) -> Result<i32, GqlError> {
    if value < 0 {
        return Err(GqlError::Validation(format!(
            "{field} must be greater than or equal to 0"
        )));
    }
    Ok(value)
}

pub fn optional_non_negative(field: &str, value: Option<i32>) -> Result<Option<i32>, GqlError> {
    value.map(|v| non_negative(field, v)).transpose()
}
