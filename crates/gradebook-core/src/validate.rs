//! Form validation
//!
//! Turns raw form text into a [`StudentDraft`] or a rejection reason.
//! The error messages here are the exact text shown to the user.

use thiserror::Error;

use crate::models::StudentDraft;

/// Reasons a form submission is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name field is empty after trimming
    #[error("Name is required.")]
    NameRequired,

    /// Email field is empty after trimming
    #[error("Email is required.")]
    EmailRequired,

    /// Email fails the basic sanity check
    #[error("Enter a valid email address.")]
    InvalidEmail,

    /// GPA field does not parse as a number
    #[error("GPA must be a number.")]
    GpaNotANumber,

    /// GPA parses but falls outside the allowed range
    #[error("GPA must be between 0 and 10.")]
    GpaOutOfRange,
}

/// Validate raw form input
///
/// Rules are checked in order; the first failure wins. All three inputs are
/// trimmed before any check. The email check is a simple sanity check
/// (contains '@', not at either end) rather than RFC validation.
pub fn validate(
    raw_name: &str,
    raw_email: &str,
    raw_gpa: &str,
) -> Result<StudentDraft, ValidationError> {
    let name = raw_name.trim();
    let email = raw_email.trim();
    let gpa_text = raw_gpa.trim();

    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(ValidationError::InvalidEmail);
    }

    let gpa: f64 = gpa_text
        .parse()
        .map_err(|_| ValidationError::GpaNotANumber)?;
    if !(0.0..=10.0).contains(&gpa) {
        return Err(ValidationError::GpaOutOfRange);
    }

    Ok(StudentDraft {
        name: name.to_string(),
        email: email.to_string(),
        gpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let draft = validate("Ada", "ada@example.com", "7.5").unwrap();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.gpa, 7.5);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let draft = validate("  Ada  ", " ada@example.com ", " 5 ").unwrap();
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.gpa, 5.0);
    }

    #[test]
    fn test_empty_name() {
        let err = validate("", "a@b.com", "5").unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
        assert_eq!(err.to_string(), "Name is required.");

        // Whitespace-only counts as empty
        let err = validate("   ", "a@b.com", "5").unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
    }

    #[test]
    fn test_empty_email() {
        let err = validate("A", "", "5").unwrap_err();
        assert_eq!(err, ValidationError::EmailRequired);
        assert_eq!(err.to_string(), "Email is required.");
    }

    #[test]
    fn test_invalid_email() {
        for email in ["bad-email", "@example.com", "ada@"] {
            let err = validate("A", email, "5").unwrap_err();
            assert_eq!(err, ValidationError::InvalidEmail, "email: {email}");
        }
        assert_eq!(
            validate("A", "bad-email", "5").unwrap_err().to_string(),
            "Enter a valid email address."
        );

        // An '@' anywhere in the middle is accepted, even twice
        assert!(validate("A", "a@b@c", "5").is_ok());
    }

    #[test]
    fn test_gpa_not_a_number() {
        let err = validate("A", "a@b.com", "high").unwrap_err();
        assert_eq!(err, ValidationError::GpaNotANumber);
        assert_eq!(err.to_string(), "GPA must be a number.");

        let err = validate("A", "a@b.com", "").unwrap_err();
        assert_eq!(err, ValidationError::GpaNotANumber);
    }

    #[test]
    fn test_gpa_out_of_range() {
        for gpa in ["11", "-0.5", "10.001"] {
            let err = validate("A", "a@b.com", gpa).unwrap_err();
            assert_eq!(err, ValidationError::GpaOutOfRange, "gpa: {gpa}");
        }
        assert_eq!(
            validate("A", "a@b.com", "11").unwrap_err().to_string(),
            "GPA must be between 0 and 10."
        );

        // Boundaries are inclusive
        assert_eq!(validate("A", "a@b.com", "0").unwrap().gpa, 0.0);
        assert_eq!(validate("A", "a@b.com", "10").unwrap().gpa, 10.0);
    }

    #[test]
    fn test_first_failure_wins() {
        // Everything is wrong; the name check fires first
        let err = validate("", "", "not-a-number").unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);

        // Name ok, email and gpa wrong; the email check fires next
        let err = validate("A", "nope", "nope").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }
}
