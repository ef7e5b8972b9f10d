//! Password strength check.
//!
//! The policy is a composite: length 8-20 plus at least one character from
//! each of four classes (digit, lowercase, uppercase, special). The regex
//! crate has no look-around, so the classes are tested as explicit
//! predicates over the trimmed value instead of one look-ahead pattern.

use regform_model::FieldName;

use crate::error::FieldError;

/// Characters the policy accepts as "special".
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+}{"':;?/.>,<[]\|=~-"#;

/// Check a password value. The policy runs on the trimmed value.
pub fn check(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required(FieldName::Password));
    }
    if !satisfies_policy(trimmed) {
        return Some(FieldError::PasswordPolicy);
    }
    None
}

/// Length 8-20 characters with at least one digit, one lowercase letter,
/// one uppercase letter, and one special character.
fn satisfies_policy(value: &str) -> bool {
    let length = value.chars().count();
    if !(8..=20).contains(&length) {
        return false;
    }
    value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| SPECIAL_CHARS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_required() {
        assert_eq!(check(""), Some(FieldError::Required(FieldName::Password)));
        assert_eq!(check("  "), Some(FieldError::Required(FieldName::Password)));
    }

    #[test]
    fn test_missing_class_rejected() {
        assert_eq!(check("alllowercase1!"), Some(FieldError::PasswordPolicy));
        assert_eq!(check("ALLUPPERCASE1!"), Some(FieldError::PasswordPolicy));
        assert_eq!(check("NoDigitsHere!"), Some(FieldError::PasswordPolicy));
        assert_eq!(check("NoSpecials1a"), Some(FieldError::PasswordPolicy));
    }

    #[test]
    fn test_length_bounds() {
        // 7 characters, otherwise compliant.
        assert_eq!(check("Abcde1!"), Some(FieldError::PasswordPolicy));
        // 21 characters, otherwise compliant.
        assert_eq!(check("Abcdefghijklmnopqr1!x"), Some(FieldError::PasswordPolicy));
        // Boundaries are inclusive.
        assert_eq!(check("Abcdef1!"), None);
        assert_eq!(check("Abcdefghijklmnopqy1!"), None);
    }

    #[test]
    fn test_valid_passwords() {
        assert_eq!(check("short1A!"), None);
        // The policy runs on the trimmed value.
        assert_eq!(check("  Abcdef1!  "), None);
        // Every character of the special set counts.
        for special in SPECIAL_CHARS.chars() {
            let candidate = format!("Abcdef1{special}");
            assert_eq!(check(&candidate), None, "special char {special:?}");
        }
    }
}
