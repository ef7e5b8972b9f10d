//! Password confirmation check.
//!
//! The only cross-field rule: the confirmation must equal the current
//! password. Emptiness is tested on the trimmed value like every other
//! field, but the equality runs on the raw values so that a stray leading
//! or trailing space still reads as a mismatch.

use regform_model::FieldName;

use crate::error::FieldError;

/// Check a confirmation value against the current password.
pub fn check(value: &str, password: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::Required(FieldName::ConfirmPassword));
    }
    if value != password {
        return Some(FieldError::PasswordMismatch);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_required() {
        assert_eq!(
            check("", "Abcdef1!"),
            Some(FieldError::Required(FieldName::ConfirmPassword))
        );
        assert_eq!(
            check("   ", "Abcdef1!"),
            Some(FieldError::Required(FieldName::ConfirmPassword))
        );
    }

    #[test]
    fn test_exact_match_required() {
        assert_eq!(check("Abcdef1!", "Abcdef1!"), None);
        assert_eq!(
            check("Abcdef1?", "Abcdef1!"),
            Some(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn test_whitespace_variants_mismatch() {
        // Trimmed values would be equal; the raw comparison must still flag
        // the trailing space.
        assert_eq!(
            check("Abcdef1! ", "Abcdef1!"),
            Some(FieldError::PasswordMismatch)
        );
        assert_eq!(
            check(" Abcdef1!", "Abcdef1!"),
            Some(FieldError::PasswordMismatch)
        );
    }
}
