//! Game Forum - an in-memory forum core.
//!
//! Sections, topics and posts, a lightweight login/registration flow and an
//! admin moderation panel. All state lives in memory for the lifetime of the
//! process; rendering is left to the caller.

pub mod admin;
pub mod auth;
pub mod board;
pub mod config;
pub mod datetime;
pub mod error;
pub mod forum;
pub mod i18n;
pub mod logging;

pub use admin::{require_admin_mode, BanRecord, ModerationError, ModerationStore};
pub use auth::{
    Account, AdminModePolicy, AuthError, Role, SessionManager, UserDirectory, ValidationError,
};
pub use board::{BoardError, ForumCatalog, Post, Section, Topic, TopicFlag, TopicThread};
pub use config::Config;
pub use error::{ErrorKind, ForumError, Result};
pub use forum::{Forum, ForumSnapshot, ForumStats, TopicRef};
pub use i18n::I18n;
