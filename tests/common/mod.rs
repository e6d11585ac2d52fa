//! Test helpers for E2E tests.
//!
//! Provides forum builders and lookup helpers shared by the E2E tests.

#![allow(dead_code)]

use gameforum::config::Config;
use gameforum::{Forum, Topic};

/// Username of the seeded administrator in test forums.
pub const ADMIN_USERNAME: &str = "Admin_Seed";

/// Configuration used by test forums.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.forum.admin_username = ADMIN_USERNAME.to_string();
    config.locale.timezone = "UTC".to_string();
    config
}

/// A fresh forum with the seeded content.
pub fn test_forum() -> Forum {
    Forum::new(test_config()).expect("test config is valid")
}

/// A fresh forum using the English catalog.
pub fn english_forum() -> Forum {
    let mut config = test_config();
    config.locale.language = "en".to_string();
    Forum::new(config).expect("test config is valid")
}

/// A fresh forum with the strict admin-mode policy.
pub fn strict_forum() -> Forum {
    let mut config = test_config();
    config.forum.strict_admin_mode = true;
    Forum::new(config).expect("test config is valid")
}

/// A fresh forum signed in as the seeded administrator.
pub fn admin_forum() -> Forum {
    let mut forum = test_forum();
    forum
        .login(ADMIN_USERNAME, "irrelevant")
        .expect("seeded admin exists");
    forum
}

/// Find a topic in the unfiltered catalog.
pub fn topic(forum: &Forum, section_id: &str, topic_id: i64) -> Topic {
    forum
        .catalog()
        .select_topic(section_id, topic_id)
        .expect("topic exists")
        .clone()
}

/// IDs of the topics a viewer currently sees.
pub fn visible_topic_ids(forum: &Forum) -> Vec<i64> {
    forum
        .sections()
        .iter()
        .flat_map(|s| s.topics.iter().map(|t| t.id))
        .collect()
}
