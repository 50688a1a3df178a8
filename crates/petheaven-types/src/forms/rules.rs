//! Shared field validation rules.
//!
//! Every rule returns `Err(FieldError)` carrying the exact message shown
//! under the field, so `validate` implementations collect outcomes with
//! [`Result::err`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_email_regex() -> &'static Regex {
    // Permissive shape check: non-space local part, host, and dot suffix,
    // found anywhere in the value
    EMAIL_REGEX.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("Email regex is valid"))
}

fn get_digits_regex() -> &'static Regex {
    DIGITS_REGEX.get_or_init(|| Regex::new(r"^[0-9]{8,}$").expect("Digits regex is valid"))
}

/// A failed validation rule for a single form field.
///
/// The `Display` output is the message rendered inline under the field.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "rule", content = "details", rename_all = "snake_case")]
pub enum FieldError {
    /// Required field left blank; the message names the field
    #[error("{message}")]
    Blank {
        /// Field-specific phrasing, e.g. "Name is required"
        message: String,
    },

    /// Value does not look like an email address
    #[error("Email is invalid")]
    InvalidEmail,

    /// Phone has fewer than eight digits once separators are stripped
    #[error("Phone number must be at least 8 digits")]
    PhoneTooShort,

    /// Age is missing or not a positive number
    #[error("Valid age is required")]
    InvalidAge,

    /// No pet chosen from the roster
    #[error("Please select a pet")]
    NoPetChosen,
}

impl FieldError {
    fn blank(message: &str) -> Self {
        FieldError::Blank {
            message: message.to_string(),
        }
    }

    /// Check if this failure is a missing value rather than a malformed one.
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank { .. })
    }
}

/// Require a non-blank value after trimming.
pub fn required(value: &str, message: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::blank(message));
    }
    Ok(())
}

/// Require a present, email-shaped value.
pub fn email(value: &str) -> Result<(), FieldError> {
    required(value, "Email is required")?;
    if !get_email_regex().is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Require a present phone number with at least eight digits. Spaces and
/// hyphens are accepted as separators and ignored.
pub fn phone(value: &str) -> Result<(), FieldError> {
    required(value, "Phone number is required")?;
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if !get_digits_regex().is_match(&digits) {
        return Err(FieldError::PhoneTooShort);
    }
    Ok(())
}

/// Require a positive numeric age. No upper bound and no whole-number
/// restriction is applied.
pub fn age(value: &str) -> Result<(), FieldError> {
    let age: f64 = value.trim().parse().map_err(|_| FieldError::InvalidAge)?;
    if !age.is_finite() || age <= 0.0 {
        return Err(FieldError::InvalidAge);
    }
    Ok(())
}

/// Require that a pet was chosen from the roster.
pub fn pet_choice(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::NoPetChosen);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_treats_whitespace_as_blank() {
        assert!(required("  ", "Name is required").is_err());
        assert!(required("\t\n", "Name is required").is_err());
        assert_eq!(required("Ada", "Name is required"), Ok(()));
    }

    #[test]
    fn test_required_preserves_field_phrasing() {
        let err = required("", "Breed is required").unwrap_err();
        assert!(err.is_blank());
        assert_eq!(err.to_string(), "Breed is required");
    }

    #[test]
    fn test_email_accepts_permissive_shapes() {
        assert_eq!(email("jo@example.com"), Ok(()));
        assert_eq!(email("a@b.c"), Ok(()));
    }

    #[test]
    fn test_email_rejects_missing_parts() {
        assert_eq!(email("not-an-email"), Err(FieldError::InvalidEmail));
        assert_eq!(email("user@host"), Err(FieldError::InvalidEmail));
        assert!(email("").unwrap_err().is_blank());
    }

    #[test]
    fn test_phone_boundary_at_eight_digits() {
        assert_eq!(phone("1234567"), Err(FieldError::PhoneTooShort));
        assert_eq!(phone("12345678"), Ok(()));
    }

    #[test]
    fn test_phone_ignores_spaces_and_hyphens() {
        assert_eq!(phone("9123 4567"), Ok(()));
        assert_eq!(phone("91-23-45-67"), Ok(()));
        assert_eq!(phone("912 345"), Err(FieldError::PhoneTooShort));
    }

    #[test]
    fn test_phone_rejects_non_digit_characters() {
        assert_eq!(phone("12345678x"), Err(FieldError::PhoneTooShort));
        assert_eq!(phone("+6591234567"), Err(FieldError::PhoneTooShort));
    }

    #[test]
    fn test_age_requires_a_positive_number() {
        assert_eq!(age(""), Err(FieldError::InvalidAge));
        assert_eq!(age("0"), Err(FieldError::InvalidAge));
        assert_eq!(age("-2"), Err(FieldError::InvalidAge));
        assert_eq!(age("three"), Err(FieldError::InvalidAge));
        assert_eq!(age("3"), Ok(()));
        assert_eq!(age("2.5"), Ok(()));
    }

    #[test]
    fn test_field_error_serde_round_trip() {
        let err = FieldError::blank("Name is required");
        let json = serde_json::to_string(&err).unwrap();
        let back: FieldError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
