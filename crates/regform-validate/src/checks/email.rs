//! Email address format check.

use std::sync::LazyLock;

use regex::Regex;
use regform_model::FieldName;

use crate::error::FieldError;

/// `local@domain.tld`: local part of word chars and `.%+-`, one or more
/// dotted domain labels, TLD of at least two word characters.
/// Case-insensitive.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([\w.%+-]+)@([\w-]+\.)+(\w{2,})$").expect("invalid email regex")
});

/// Check an email value. Matching runs on the trimmed value.
pub fn check(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required(FieldName::Email));
    }
    if !EMAIL_REGEX.is_match(trimmed) {
        return Some(FieldError::EmailFormat);
    }
    None
}
