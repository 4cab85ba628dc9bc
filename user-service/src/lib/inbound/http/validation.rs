//! Structural checks on request bodies, run before anything reaches the
//! services.

use std::str::FromStr;

use email_address::EmailAddress;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const PASSWORD_MIN_CHARS: usize = 8;
/// Matches the width of the `users.email` column.
pub const EMAIL_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters")]
    NameLength,

    #[error("Invalid email address: {0}")]
    Email(String),

    #[error("Email must be at most {EMAIL_MAX_CHARS} characters")]
    EmailTooLong,

    #[error("Password must be at least {PASSWORD_MIN_CHARS} characters")]
    PasswordTooShort,

    #[error("Password is required")]
    PasswordMissing,
}

/// Length is counted in characters, not bytes.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();

    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::NameLength);
    }

    Ok(())
}

/// An empty name means "leave unchanged" and is accepted.
pub fn validate_optional_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Ok(());
    }

    validate_name(name)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.chars().count() > EMAIL_MAX_CHARS {
        return Err(ValidationError::EmailTooLong);
    }

    EmailAddress::from_str(email)
        .map(|_| ())
        .map_err(|e| ValidationError::Email(e.to_string()))
}

pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordMissing);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert_eq!(validate_name("J"), Err(ValidationError::NameLength));
        assert!(validate_name("Jo").is_ok());
        assert!(validate_name(&"a".repeat(100)).is_ok());
        assert_eq!(
            validate_name(&"a".repeat(101)),
            Err(ValidationError::NameLength)
        );
    }

    #[test]
    fn test_name_counts_characters() {
        assert!(validate_name("Zoë").is_ok());
        assert!(validate_name(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn test_optional_name() {
        assert!(validate_optional_name("").is_ok());
        assert_eq!(validate_optional_name("J"), Err(ValidationError::NameLength));
    }

    #[test]
    fn test_email() {
        assert!(validate_email("john@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_email_length_cap() {
        let domain = "@example.com";
        let at_limit = format!("{}{}", "a".repeat(EMAIL_MAX_CHARS - domain.len()), domain);
        let over_limit = format!("a{}", at_limit);

        assert_eq!(at_limit.chars().count(), EMAIL_MAX_CHARS);
        assert_ne!(
            validate_email(&at_limit),
            Err(ValidationError::EmailTooLong)
        );
        assert_eq!(
            validate_email(&over_limit),
            Err(ValidationError::EmailTooLong)
        );
    }

    #[test]
    fn test_passwords() {
        assert_eq!(
            validate_new_password("short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_new_password("password123").is_ok());

        assert_eq!(
            validate_login_password(""),
            Err(ValidationError::PasswordMissing)
        );
        assert!(validate_login_password("x").is_ok());
    }
}
