//! Error types for the forum.

use thiserror::Error;

use crate::admin::ModerationError;
use crate::auth::{AuthError, ValidationError};
use crate::board::BoardError;

/// Broad category of a [`ForumError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or invalid input.
    Validation,
    /// An id or slug did not resolve.
    NotFound,
    /// The resource already exists.
    Conflict,
    /// The session may not perform the operation.
    Permission,
    /// Configuration or I/O failure outside user input.
    Internal,
}

/// Common error type for the forum.
#[derive(Error, Debug)]
pub enum ForumError {
    /// Login or registration error.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Moderation error.
    #[error("{0}")]
    Moderation(#[from] ModerationError),

    /// Catalog or thread error.
    #[error("{0}")]
    Board(#[from] BoardError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<ValidationError> for ForumError {
    fn from(e: ValidationError) -> Self {
        ForumError::Auth(AuthError::Validation(e))
    }
}

impl ForumError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForumError::Auth(AuthError::Validation(_)) => ErrorKind::Validation,
            ForumError::Auth(AuthError::UsernameTaken) => ErrorKind::Conflict,
            ForumError::Auth(AuthError::UserNotFound) => ErrorKind::NotFound,
            ForumError::Auth(AuthError::AdminRequired) => ErrorKind::Permission,
            ForumError::Moderation(ModerationError::EmptyName) => ErrorKind::Validation,
            ForumError::Moderation(ModerationError::AdminModeRequired) => ErrorKind::Permission,
            ForumError::Board(BoardError::SectionNotFound(_))
            | ForumError::Board(BoardError::TopicNotFound { .. })
            | ForumError::Board(BoardError::ThreadMismatch { .. }) => ErrorKind::NotFound,
            ForumError::Board(BoardError::TopicLocked(_)) => ErrorKind::Permission,
            ForumError::Board(BoardError::EmptyContent)
            | ForumError::Board(BoardError::EmptyForumName) => ErrorKind::Validation,
            ForumError::Io(_) | ForumError::Config(_) => ErrorKind::Internal,
        }
    }

    /// Message key of the localized, user-facing text, if there is one.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            ForumError::Auth(e) => Some(e.message_key()),
            ForumError::Moderation(e) => Some(e.message_key()),
            ForumError::Board(e) => Some(e.message_key()),
            ForumError::Io(_) | ForumError::Config(_) => None,
        }
    }
}

/// Result type alias for forum operations.
pub type Result<T> = std::result::Result<T, ForumError>;
