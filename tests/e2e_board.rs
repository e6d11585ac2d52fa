//! E2E board tests.
//!
//! Tests topic selection, posting and post moderation.

mod common;

use common::{admin_forum, test_forum, topic};
use gameforum::{BoardError, ErrorKind, ForumError, TopicFlag};

#[test]
fn test_open_and_close_topic() {
    let mut forum = test_forum();
    let opened = forum.open_topic("support", 1).unwrap();
    assert_eq!(opened.author, "Player_228");
    assert_eq!(forum.selected_topic(), Some(&opened));

    let snapshot = forum.snapshot();
    let selected = snapshot.selected.unwrap();
    assert_eq!(selected.section_id, "support");
    assert_eq!(selected.topic_id, 1);

    forum.close_topic();
    assert!(forum.selected_topic().is_none());
}

#[test]
fn test_open_topic_wrong_section() {
    let mut forum = test_forum();
    let err = forum.open_topic("news", 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(forum.selected_topic().is_none());
}

#[test]
fn test_add_post_empty_rejected() {
    let mut forum = test_forum();
    let err = forum.add_post("support", 1, "Hero", "   ").unwrap_err();
    assert!(matches!(err, ForumError::Board(BoardError::EmptyContent)));
    assert_eq!(forum.posts("support", 1).unwrap().len(), 3);
}

#[test]
fn test_add_post_locked_rejected() {
    let mut forum = admin_forum();
    forum
        .toggle_topic_flag("trade", 16, TopicFlag::Locked)
        .unwrap();

    let err = forum.add_post("trade", 16, "Hero", "still selling?").unwrap_err();
    assert!(matches!(err, ForumError::Board(BoardError::TopicLocked(16))));
    assert_eq!(forum.posts("trade", 16).unwrap().len(), 3);

    forum
        .toggle_topic_flag("trade", 16, TopicFlag::Locked)
        .unwrap();
    forum.add_post("trade", 16, "Hero", "still selling?").unwrap();
    assert_eq!(forum.posts("trade", 16).unwrap().len(), 4);
}

#[test]
fn test_add_post_does_not_touch_reply_counter() {
    let mut forum = test_forum();
    let replies = topic(&forum, "guides", 12).replies;
    let total = forum.stats().total_posts;

    forum.add_post("guides", 12, "Hero", "great guide").unwrap();

    assert_eq!(topic(&forum, "guides", 12).replies, replies);
    assert_eq!(forum.stats().total_posts, total);
}

#[test]
fn test_hidden_posts_filtered_for_guests() {
    let mut forum = admin_forum();
    let post = forum
        .add_post("discussions", 7, "Admin", "rules reminder")
        .unwrap();
    forum
        .toggle_post_hidden("discussions", 7, post.id)
        .unwrap()
        .unwrap();
    assert_eq!(forum.posts("discussions", 7).unwrap().len(), 4);

    forum.logout();
    let posts = forum.posts("discussions", 7).unwrap();
    assert_eq!(posts.len(), 3);
    assert!(posts.iter().all(|p| !p.is_hidden));
}

#[test]
fn test_toggle_post_hidden_requires_admin_mode() {
    let mut forum = test_forum();
    let err = forum.toggle_post_hidden("support", 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Permission);
}

#[test]
fn test_guest_cannot_post_to_hidden_topic() {
    let mut forum = test_forum();
    let err = forum.add_post("discussions", 9, "Hero", "hi").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
