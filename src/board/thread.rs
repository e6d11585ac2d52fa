//! Per-topic post threads.

use serde::Serialize;
use tracing::{debug, info};

use crate::datetime::IdSequence;

use super::types::Topic;
use super::BoardError;

/// Post entity inside a topic thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Post ID, unique within the thread.
    pub id: i64,
    /// Author label.
    pub author: String,
    /// Post body.
    pub content: String,
    /// Date label.
    pub date: String,
    /// Hidden flag.
    pub is_hidden: bool,
}

impl Post {
    /// Create a visible post.
    pub fn new(
        id: i64,
        author: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
            date: date.into(),
            is_hidden: false,
        }
    }

    /// Check if a viewer may see this post.
    pub fn is_visible_to(&self, viewer_is_admin: bool) -> bool {
        viewer_is_admin || !self.is_hidden
    }
}

/// Posts of a single topic.
#[derive(Debug, Clone)]
pub struct TopicThread {
    topic_id: i64,
    posts: Vec<Post>,
    ids: IdSequence,
    just_now_label: String,
}

impl TopicThread {
    /// Create a thread for a topic.
    ///
    /// # Arguments
    ///
    /// * `topic_id` - ID of the parent topic
    /// * `posts` - Initial posts
    /// * `just_now_label` - Date label given to new posts
    pub fn new(topic_id: i64, posts: Vec<Post>, just_now_label: impl Into<String>) -> Self {
        let floor = posts.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            topic_id,
            posts,
            ids: IdSequence::starting_after(floor),
            just_now_label: just_now_label.into(),
        }
    }

    /// ID of the parent topic.
    pub fn topic_id(&self) -> i64 {
        self.topic_id
    }

    /// Posts the viewer may see, in posting order.
    pub fn list_posts(&self, viewer_is_admin: bool) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.is_visible_to(viewer_is_admin))
            .cloned()
            .collect()
    }

    /// Append a post.
    ///
    /// Rejected when `parent` is not this thread's topic, when it is locked,
    /// or when the content is blank.
    /// Content is stored trimmed.
    pub fn add_post(
        &mut self,
        parent: &Topic,
        author: &str,
        content: &str,
    ) -> Result<Post, BoardError> {
        if parent.id != self.topic_id {
            debug!(
                topic_id = self.topic_id,
                parent_id = parent.id,
                "Post rejected: topic does not own this thread"
            );
            return Err(BoardError::ThreadMismatch {
                expected: self.topic_id,
                found: parent.id,
            });
        }

        if parent.is_locked {
            debug!(topic_id = parent.id, "Post rejected: topic locked");
            return Err(BoardError::TopicLocked(parent.id));
        }

        let content = content.trim();
        if content.is_empty() {
            debug!(topic_id = parent.id, "Post rejected: empty content");
            return Err(BoardError::EmptyContent);
        }

        let post = Post::new(self.ids.next_id(), author, content, &self.just_now_label);
        self.posts.push(post.clone());

        info!(
            topic_id = self.topic_id,
            post_id = post.id,
            author = %post.author,
            "Post added"
        );

        Ok(post)
    }

    /// Flip the hidden flag on a post and return the updated post.
    ///
    /// Returns `None` if no post has that ID.
    pub fn toggle_post_hidden(&mut self, post_id: i64) -> Option<Post> {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            debug!(topic_id = self.topic_id, post_id, "Hide ignored: no such post");
            return None;
        };

        post.is_hidden = !post.is_hidden;
        info!(
            topic_id = self.topic_id,
            post_id,
            hidden = post.is_hidden,
            "Post visibility toggled"
        );

        Some(post.clone())
    }

    /// Get a post by ID, hidden or not.
    pub fn post(&self, post_id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Number of posts, hidden ones included.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check if the thread has no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
