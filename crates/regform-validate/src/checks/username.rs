//! Username format check.

use std::sync::LazyLock;

use regex::Regex;
use regform_model::FieldName;

use crate::error::FieldError;

/// Alphanumeric only, 3-15 characters.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,15}$").expect("invalid username regex"));

/// Check a username value. Matching runs on the trimmed value.
pub fn check(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required(FieldName::Username));
    }
    if !USERNAME_REGEX.is_match(trimmed) {
        return Some(FieldError::UsernameFormat);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_required() {
        assert_eq!(check(""), Some(FieldError::Required(FieldName::Username)));
        assert_eq!(check("   "), Some(FieldError::Required(FieldName::Username)));
    }

    #[test]
    fn test_too_short_and_special_chars_rejected() {
        assert_eq!(check("ab"), Some(FieldError::UsernameFormat));
        assert_eq!(check("abc_1"), Some(FieldError::UsernameFormat));
        assert_eq!(check("sixteen16chars16"), Some(FieldError::UsernameFormat));
    }

    #[test]
    fn test_valid_usernames() {
        assert_eq!(check("User123"), None);
        assert_eq!(check("abc"), None);
        // Surrounding whitespace is trimmed before matching.
        assert_eq!(check("  User123  "), None);
    }
}
