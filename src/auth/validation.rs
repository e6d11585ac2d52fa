//! Input validation for login and registration.
//!
//! Checks run in a fixed order and the first failure wins.

use thiserror::Error;

/// Minimum username length (after trimming).
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Validation errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("all fields are required")]
    MissingFields,

    /// Password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Username is too short.
    #[error("username must be at least {MIN_USERNAME_LENGTH} characters")]
    UsernameTooShort,

    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
}

impl ValidationError {
    /// Message key of the localized, user-facing text.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "auth.missing_fields",
            ValidationError::PasswordMismatch => "auth.password_mismatch",
            ValidationError::UsernameTooShort => "auth.username_too_short",
            ValidationError::PasswordTooShort => "auth.password_too_short",
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validate login input.
///
/// ```
/// use gameforum::auth::validation::{validate_login, ValidationError};
///
/// assert!(validate_login("hero", "x").is_ok());
/// assert_eq!(validate_login("  ", "x"), Err(ValidationError::MissingFields));
/// ```
pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if is_blank(username) || is_blank(password) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Validate registration input.
///
/// Order: missing fields, password mismatch, username length, password length.
///
/// ```
/// use gameforum::auth::validation::{validate_registration, ValidationError};
///
/// assert!(validate_registration("Hero", "pass", "pass").is_ok());
/// assert_eq!(
///     validate_registration("Hero", "pass", "pasS"),
///     Err(ValidationError::PasswordMismatch)
/// );
/// ```
pub fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if is_blank(username) || is_blank(password) || is_blank(confirm_password) {
        return Err(ValidationError::MissingFields);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    // Lengths are in Unicode scalar values.
    if username.trim().chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooShort);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_ok() {
        assert!(validate_login("Admin", "anything").is_ok());
    }

    #[test]
    fn test_validate_login_missing() {
        assert_eq!(validate_login("", "pw"), Err(ValidationError::MissingFields));
        assert_eq!(validate_login("Hero", "   "), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_validate_registration_ok() {
        assert!(validate_registration("Hero", "1234", "1234").is_ok());
        assert!(validate_registration("  Ник  ", "пароль", "пароль").is_ok());
    }

    #[test]
    fn test_validate_registration_missing_fields() {
        assert_eq!(
            validate_registration("Hero", "1234", " "),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration("", "1234", "1234"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_validate_registration_mismatch() {
        assert_eq!(
            validate_registration("Hero", "1234", "12345"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_validate_registration_username_too_short() {
        assert_eq!(
            validate_registration(" ab ", "1234", "1234"),
            Err(ValidationError::UsernameTooShort)
        );
    }

    #[test]
    fn test_validate_registration_password_too_short() {
        assert_eq!(
            validate_registration("Hero", "123", "123"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Mismatch is reported before the short username.
        assert_eq!(
            validate_registration("ab", "1", "2"),
            Err(ValidationError::PasswordMismatch)
        );
        // Short username is reported before the short password.
        assert_eq!(
            validate_registration("ab", "1", "1"),
            Err(ValidationError::UsernameTooShort)
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(validate_registration("Hero", "пар4", "пар4").is_ok());
    }

    #[test]
    fn test_lengths_count_chars_not_utf16_units() {
        assert_eq!(
            validate_registration("😀😀", "😀😀😀😀", "😀😀😀😀"),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(
            validate_registration("Hero", "😀😀", "😀😀"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_registration("😀😀😀", "😀😀😀😀", "😀😀😀😀").is_ok());
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(
            ValidationError::MissingFields.message_key(),
            "auth.missing_fields"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.message_key(),
            "auth.password_too_short"
        );
    }
}
