//! Input validation primitives.
//!
//! Helpers that turn raw CLI strings into checked values, failing with
//! `Error::validation_invalid_argument`.

use crate::error::{Error, Result};

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
///
/// Fails when nothing is left.
pub fn require_list(value: &str, field: &str) -> Result<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        return Err(Error::validation_invalid_argument(
            field,
            format!("Expected a comma-separated list, got '{}'", value),
            None,
            None,
        ));
    }

    Ok(items)
}
