//! The forum catalog: sections, their topics and the forum title.

use tracing::{debug, info};

use super::types::{Section, Topic, TopicFlag};
use super::BoardError;

/// Sections with their topics plus the global forum title.
#[derive(Debug, Clone)]
pub struct ForumCatalog {
    forum_name: String,
    sections: Vec<Section>,
}

impl ForumCatalog {
    /// Create a catalog from a title and a fixed set of sections.
    pub fn new(forum_name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            forum_name: forum_name.into(),
            sections,
        }
    }

    /// The forum title.
    pub fn forum_name(&self) -> &str {
        &self.forum_name
    }

    /// Replace the forum title.
    ///
    /// The new title is trimmed and must not be empty.
    pub fn rename_forum(&mut self, new_name: &str) -> Result<(), BoardError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            debug!("Rename rejected: empty forum name");
            return Err(BoardError::EmptyForumName);
        }

        info!(old = %self.forum_name, new = %new_name, "Forum renamed");
        self.forum_name = new_name.to_string();
        Ok(())
    }

    /// Sections with topics filtered for the viewer.
    ///
    /// Hidden topics are only included for admin viewers.
    pub fn list_sections(&self, viewer_is_admin: bool) -> Vec<Section> {
        self.sections
            .iter()
            .map(|s| s.visible_to(viewer_is_admin))
            .collect()
    }

    /// Get a section by slug.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Resolve a topic by section slug and topic ID.
    pub fn select_topic(&self, section_id: &str, topic_id: i64) -> Result<&Topic, BoardError> {
        self.section(section_id)
            .ok_or_else(|| BoardError::SectionNotFound(section_id.to_string()))?
            .topic(topic_id)
            .ok_or_else(|| BoardError::topic_not_found(section_id, topic_id))
    }

    /// Flip one flag on a topic and return the updated topic.
    ///
    /// Nothing changes when the pair does not resolve.
    pub fn toggle_topic_flag(
        &mut self,
        section_id: &str,
        topic_id: i64,
        flag: TopicFlag,
    ) -> Result<Topic, BoardError> {
        let topic = self
            .sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .ok_or_else(|| BoardError::SectionNotFound(section_id.to_string()))?
            .topic_mut(topic_id)
            .ok_or_else(|| BoardError::topic_not_found(section_id, topic_id))?;

        let value = topic.toggle(flag);

        info!(
            section_id = %section_id,
            topic_id,
            flag = %flag,
            value,
            "Topic flag toggled"
        );

        Ok(topic.clone())
    }

    /// Number of topics, hidden ones included.
    pub fn total_topics(&self) -> usize {
        self.sections.iter().map(|s| s.topics.len()).sum()
    }

    /// Sum of every topic's reply counter.
    pub fn total_posts(&self) -> u64 {
        self.sections
            .iter()
            .flat_map(|s| s.topics.iter())
            .map(|t| u64::from(t.replies))
            .sum()
    }
}
