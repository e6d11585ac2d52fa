//! Section and topic models for the forum.
//!
//! This module defines the Section and Topic structs and the TopicFlag
//! enum naming the moderation flags a topic carries.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Moderation flag on a topic.
///
/// Every flag is toggled independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicFlag {
    /// Shown with a pin marker.
    Pinned,
    /// Accepts no new posts.
    Locked,
    /// Invisible outside admin mode.
    Hidden,
    /// Author marked as banned.
    AuthorBanned,
}

impl TopicFlag {
    /// All flags, in display order.
    pub const ALL: [TopicFlag; 4] = [
        TopicFlag::Pinned,
        TopicFlag::Locked,
        TopicFlag::Hidden,
        TopicFlag::AuthorBanned,
    ];

    /// Convert the flag to its string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicFlag::Pinned => "pinned",
            TopicFlag::Locked => "locked",
            TopicFlag::Hidden => "hidden",
            TopicFlag::AuthorBanned => "author_banned",
        }
    }
}

impl fmt::Display for TopicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TopicFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pinned" | "pin" => Ok(TopicFlag::Pinned),
            "locked" | "lock" => Ok(TopicFlag::Locked),
            "hidden" | "hide" => Ok(TopicFlag::Hidden),
            "author_banned" | "authorbanned" => Ok(TopicFlag::AuthorBanned),
            _ => Err(format!("unknown topic flag: {s}")),
        }
    }
}

/// Topic entity listed inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Topic ID, unique across all sections.
    pub id: i64,
    /// Topic title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Reply counter (seed data, independent of the thread's posts).
    pub replies: u32,
    /// View counter.
    pub views: u32,
    /// Last activity label (e.g. "5 мин").
    pub last_activity: String,
    /// Pinned flag.
    pub is_pinned: bool,
    /// Locked flag.
    pub is_locked: bool,
    /// Hidden flag.
    pub is_hidden: bool,
    /// Author-banned flag.
    pub author_banned: bool,
}

impl Topic {
    /// Create an unflagged topic.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        replies: u32,
        views: u32,
        last_activity: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            replies,
            views,
            last_activity: last_activity.into(),
            is_pinned: false,
            is_locked: false,
            is_hidden: false,
            author_banned: false,
        }
    }

    /// Set a flag.
    pub fn with_flag(mut self, flag: TopicFlag) -> Self {
        *self.flag_mut(flag) = true;
        self
    }

    /// Read a flag.
    pub fn flag(&self, flag: TopicFlag) -> bool {
        match flag {
            TopicFlag::Pinned => self.is_pinned,
            TopicFlag::Locked => self.is_locked,
            TopicFlag::Hidden => self.is_hidden,
            TopicFlag::AuthorBanned => self.author_banned,
        }
    }

    /// Mutable access to a flag field.
    pub fn flag_mut(&mut self, flag: TopicFlag) -> &mut bool {
        match flag {
            TopicFlag::Pinned => &mut self.is_pinned,
            TopicFlag::Locked => &mut self.is_locked,
            TopicFlag::Hidden => &mut self.is_hidden,
            TopicFlag::AuthorBanned => &mut self.author_banned,
        }
    }

    /// Flip a flag and return its new value.
    pub fn toggle(&mut self, flag: TopicFlag) -> bool {
        let value = self.flag_mut(flag);
        *value = !*value;
        *value
    }

    /// Check if a viewer may see this topic.
    pub fn is_visible_to(&self, viewer_is_admin: bool) -> bool {
        viewer_is_admin || !self.is_hidden
    }
}

/// Forum section holding an ordered list of topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Stable slug (e.g. "support").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon name used by the presentation layer.
    pub icon: String,
    /// Section description.
    pub description: String,
    /// Accent color used by the presentation layer.
    pub color: String,
    /// Topics in display order.
    pub topics: Vec<Topic>,
}

impl Section {
    /// Create a section without topics.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            color: color.into(),
            topics: Vec::new(),
        }
    }

    /// Set the topics.
    pub fn with_topics(mut self, topics: Vec<Topic>) -> Self {
        self.topics = topics;
        self
    }

    /// Get a topic by ID.
    pub fn topic(&self, topic_id: i64) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }

    /// Get a mutable topic by ID.
    pub fn topic_mut(&mut self, topic_id: i64) -> Option<&mut Topic> {
        self.topics.iter_mut().find(|t| t.id == topic_id)
    }

    /// Copy of this section with only the topics the viewer may see.
    pub fn visible_to(&self, viewer_is_admin: bool) -> Section {
        Section {
            topics: self
                .topics
                .iter()
                .filter(|t| t.is_visible_to(viewer_is_admin))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}
