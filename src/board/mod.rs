//! Board module for the forum.
//!
//! This module provides the forum catalog:
//! - Sections and their topics
//! - Topic moderation flags (pinned, locked, hidden, author banned)
//! - Per-topic post threads
//! - The initial forum content

mod catalog;
pub mod seed;
mod thread;
mod types;

pub use catalog::ForumCatalog;
pub use thread::{Post, TopicThread};
pub use types::{Section, Topic, TopicFlag};

use thiserror::Error;

/// Board-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No section with that slug.
    #[error("section not found: {0}")]
    SectionNotFound(String),

    /// The (section, topic) pair does not resolve.
    #[error("topic {topic_id} not found in section {section_id}")]
    TopicNotFound {
        /// Section slug.
        section_id: String,
        /// Topic ID.
        topic_id: i64,
    },

    /// The topic handed to a thread is not the thread's own topic.
    #[error("topic {found} does not belong to the thread of topic {expected}")]
    ThreadMismatch {
        /// Topic ID the thread was created for.
        expected: i64,
        /// Topic ID that was passed in.
        found: i64,
    },

    /// The topic is locked and accepts no posts.
    #[error("topic {0} is locked")]
    TopicLocked(i64),

    /// Post content is blank.
    #[error("post content must not be empty")]
    EmptyContent,

    /// New forum title is blank.
    #[error("forum name must not be empty")]
    EmptyForumName,
}

impl BoardError {
    pub(crate) fn topic_not_found(section_id: &str, topic_id: i64) -> Self {
        BoardError::TopicNotFound {
            section_id: section_id.to_string(),
            topic_id,
        }
    }

    /// Message key of the localized, user-facing text.
    pub fn message_key(&self) -> &'static str {
        match self {
            BoardError::SectionNotFound(_) => "board.section_not_found",
            BoardError::TopicNotFound { .. } | BoardError::ThreadMismatch { .. } => {
                "board.topic_not_found"
            }
            BoardError::TopicLocked(_) => "board.topic_locked",
            BoardError::EmptyContent => "board.empty_content",
            BoardError::EmptyForumName => "board.empty_forum_name",
        }
    }
}
