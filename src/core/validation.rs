//! Validation for waitlist form input
//!
//! The email rule is deliberately loose: anything shaped like
//! `localpart@domain.tld` with no whitespace and a single `@` is accepted.
//! Deliverability is the form backend's concern.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern every submitted email must match
///
/// U+FEFF is listed next to `\s` because browsers count it as whitespace.
pub const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Email does not look like `localpart@domain.tld`
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Check whether an email matches [`EMAIL_PATTERN`]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid = [
            "a@b.co",
            "jane@example.com",
            "user.name+tag@example.co.uk",
            "dev_42@sub.domain.io",
            "x@y.z",
        ];

        for email in valid {
            assert!(is_valid_email(email), "expected '{}' to be valid", email);
            assert_eq!(validate_email(email), Ok(()));
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid = [
            "",
            "plainaddress",
            "@example.com",
            "jane@",
            "jane@example",
            "jane@@example.com",
            "jane doe@example.com",
            "jane@exa mple.com",
            "jane@example.",
            " jane@example.com",
            "jane@example.com ",
            "jane@example.com\n",
            "jane\u{feff}doe@example.com",
            "jane@exa\u{feff}mple.com",
            "jane@example.c\u{feff}om",
            "\u{a0}jane@example.com",
        ];

        for email in invalid {
            assert!(!is_valid_email(email), "expected '{:?}' to be invalid", email);
            assert_eq!(validate_email(email), Err(ValidationError::InvalidEmail));
        }
    }

    #[test]
    fn test_error_message_is_user_facing() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }
}
