//! End-to-end moderation scenario.

mod common;

use common::{test_forum, topic};
use gameforum::{Role, TopicFlag};

#[test]
fn test_register_login_ban_and_flag_author() {
    let mut forum = test_forum();

    let hero = forum.register("Hero", "1234", "1234").unwrap();
    assert_eq!(hero.role, Role::User);
    forum.logout();

    let logged_in = forum.login("Hero", "1234").unwrap();
    assert_eq!(logged_in, hero);

    // Open policy: any session may switch admin mode on.
    forum.toggle_admin_mode().unwrap();
    forum.ban("Hero", "spam").unwrap();
    assert_eq!(forum.bans().unwrap().len(), 1);

    let before = topic(&forum, "trade", 15);
    assert!(!before.author_banned);

    let updated = forum
        .toggle_topic_flag("trade", 15, TopicFlag::AuthorBanned)
        .unwrap();
    assert!(updated.author_banned);

    // The ban list and the topic flag are independent.
    assert_eq!(forum.bans().unwrap().len(), 1);
    assert_eq!(forum.bans().unwrap()[0].name, "Hero");
    assert!(!forum.moderation().is_banned(&updated.author));

    // Banning does not lock the account out.
    forum.logout();
    assert!(forum.login("Hero", "x").is_ok());
}
