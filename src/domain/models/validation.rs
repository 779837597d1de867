//! Shared field validators used by the entity `Validate` derives.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Subreddit names appear in URL paths
    static ref SUBREDDIT_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]+$").expect("valid regex");
}

/// Rejects empty and whitespace-only strings
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Restricts subreddit names to ASCII letters, digits and underscores
pub fn validate_subreddit_name(value: &str) -> Result<(), ValidationError> {
    if SUBREDDIT_NAME_REGEX.is_match(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("subreddit_name");
        error.message = Some("Name may only contain letters, digits and underscores".into());
        Err(error)
    }
}
