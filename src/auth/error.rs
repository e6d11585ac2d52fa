//! Authentication errors.

use thiserror::Error;

use crate::auth::validation::ValidationError;

/// Errors produced by the login and registration flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Username already registered (ignoring case).
    #[error("username already taken")]
    UsernameTaken,

    /// No account with that username.
    #[error("user not found")]
    UserNotFound,

    /// Admin mode may only be toggled by an administrator.
    #[error("administrator identity required")]
    AdminRequired,
}

impl AuthError {
    /// Message key of the localized, user-facing text.
    pub fn message_key(&self) -> &'static str {
        match self {
            AuthError::Validation(e) => e.message_key(),
            AuthError::UsernameTaken => "auth.username_taken",
            AuthError::UserNotFound => "auth.user_not_found",
            AuthError::AdminRequired => "auth.admin_required",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        assert_eq!(AuthError::UsernameTaken.to_string(), "username already taken");
        let err = AuthError::from(ValidationError::PasswordMismatch);
        assert!(err.to_string().contains("validation"));
    }

    #[test]
    fn test_message_key_delegates_to_validation() {
        let err = AuthError::Validation(ValidationError::UsernameTooShort);
        assert_eq!(err.message_key(), "auth.username_too_short");
        assert_eq!(AuthError::UserNotFound.message_key(), "auth.user_not_found");
    }
}
