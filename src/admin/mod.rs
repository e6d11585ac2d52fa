//! Administration module for the forum.
//!
//! This module provides the ban list and the admin-mode gate used by
//! moderation operations.

mod ban;

pub use ban::{BanRecord, ModerationStore};

use thiserror::Error;

use crate::auth::SessionManager;

/// Moderation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModerationError {
    /// Ban target name is empty.
    #[error("ban target name must not be empty")]
    EmptyName,

    /// The operation needs admin mode to be switched on.
    #[error("admin mode required")]
    AdminModeRequired,
}

impl ModerationError {
    /// Message key of the localized, user-facing text.
    pub fn message_key(&self) -> &'static str {
        match self {
            ModerationError::EmptyName => "moderation.empty_name",
            ModerationError::AdminModeRequired => "moderation.admin_mode_required",
        }
    }
}

/// Require admin mode on the session.
///
/// # Examples
///
/// ```
/// use gameforum::admin::{require_admin_mode, ModerationError};
/// use gameforum::auth::SessionManager;
///
/// let mut session = SessionManager::new();
/// assert_eq!(require_admin_mode(&session), Err(ModerationError::AdminModeRequired));
///
/// session.toggle_admin_mode().unwrap();
/// assert!(require_admin_mode(&session).is_ok());
/// ```
pub fn require_admin_mode(session: &SessionManager) -> Result<(), ModerationError> {
    if session.is_admin_mode_enabled() {
        Ok(())
    } else {
        Err(ModerationError::AdminModeRequired)
    }
}
