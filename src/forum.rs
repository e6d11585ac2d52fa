//! The forum application state.
//!
//! [`Forum`] owns every store for the lifetime of the process and exposes
//! the operations a presentation layer calls. Moderation operations need
//! admin mode; the stores underneath are ungated.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::admin::{require_admin_mode, BanRecord, ModerationStore};
use crate::auth::{Account, AdminModePolicy, SessionManager, UserDirectory};
use crate::board::{
    seed, BoardError, ForumCatalog, Post, Section, Topic, TopicFlag, TopicThread,
};
use crate::config::Config;
use crate::i18n::I18n;
use crate::{ForumError, Result};

/// Reference to a topic by section slug and topic ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TopicRef {
    /// Section slug.
    pub section_id: String,
    /// Topic ID.
    pub topic_id: i64,
}

impl TopicRef {
    /// Reference a topic by section slug and topic ID.
    pub fn new(section_id: &str, topic_id: i64) -> Self {
        Self {
            section_id: section_id.to_string(),
            topic_id,
        }
    }
}

/// Forum-wide counters shown on the front page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForumStats {
    /// Number of topics, hidden ones included.
    pub total_topics: usize,
    /// Sum of the topics' reply counters.
    pub total_posts: u64,
    /// Number of registered accounts.
    pub total_users: usize,
    /// Number of authenticated sessions (0 or 1).
    pub online_users: usize,
}

/// Everything a presentation layer needs to draw the current screen.
#[derive(Debug, Clone, Serialize)]
pub struct ForumSnapshot {
    /// Forum title.
    pub forum_name: String,
    /// Whether admin mode is on.
    pub admin_mode: bool,
    /// Authenticated account, if any.
    pub identity: Option<Account>,
    /// Localized role name of the authenticated account.
    pub role_label: Option<String>,
    /// Front page counters.
    pub stats: ForumStats,
    /// Sections filtered for the current viewer.
    pub sections: Vec<Section>,
    /// Topic currently open, if any.
    pub selected: Option<TopicRef>,
}

/// In-memory forum with its session, directory, ban list, catalog and threads.
#[derive(Debug)]
pub struct Forum {
    config: Config,
    i18n: I18n,
    directory: UserDirectory,
    session: SessionManager,
    moderation: ModerationStore,
    catalog: ForumCatalog,
    threads: HashMap<TopicRef, TopicThread>,
    selected: Option<TopicRef>,
}

impl Forum {
    /// Build a forum from configuration, seeded with the initial content.
    ///
    /// # Errors
    ///
    /// Returns `ForumError::Config` if the configuration does not validate.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_sections(config, seed::sections())
    }

    /// Build a forum with a custom set of sections.
    pub fn with_sections(config: Config, sections: Vec<Section>) -> Result<Self> {
        config.validate()?;

        let i18n = I18n::builtin(&config.locale.language)
            .map_err(|e| ForumError::Config(e.to_string()))?;
        let timezone = config.locale.timezone.as_str();

        let directory = UserDirectory::new(&config.forum.admin_username, timezone);
        let session =
            SessionManager::with_policy(AdminModePolicy::from_strict(config.forum.strict_admin_mode));
        let moderation = ModerationStore::new(i18n.t("moderation.default_reason"), timezone);
        let catalog = ForumCatalog::new(config.forum.name.trim(), sections);

        info!(
            forum = %catalog.forum_name(),
            language = %i18n.locale(),
            topics = catalog.total_topics(),
            admin_policy = ?session.policy(),
            "Forum initialized"
        );

        Ok(Self {
            config,
            i18n,
            directory,
            session,
            moderation,
            catalog,
            threads: HashMap::new(),
            selected: None,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Message catalog for the configured language.
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Registered accounts.
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Current session.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Ban list.
    pub fn moderation(&self) -> &ModerationStore {
        &self.moderation
    }

    /// Sections and topics, unfiltered.
    pub fn catalog(&self) -> &ForumCatalog {
        &self.catalog
    }

    /// Whether the current viewer sees the admin view.
    pub fn is_admin_view(&self) -> bool {
        self.session.is_admin_mode_enabled()
    }

    /// Localized text for an error, falling back to its display form.
    pub fn error_message(&self, err: &ForumError) -> String {
        let fallback = err.to_string();
        match err.message_key() {
            Some(key) => self.i18n.t_or(key, &fallback).to_string(),
            None => fallback,
        }
    }

    // ---- auth ----

    /// Register an account and sign it in.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Account> {
        let account = self
            .directory
            .register(username, password, confirm_password)?;
        self.session.authenticate(account.clone());
        Ok(account)
    }

    /// Sign in by username.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Account> {
        let account = self.directory.login(username, password)?;
        self.session.authenticate(account.clone());
        Ok(account)
    }

    /// Sign out and leave admin mode.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Flip admin mode and return the new value.
    pub fn toggle_admin_mode(&mut self) -> Result<bool> {
        Ok(self.session.toggle_admin_mode()?)
    }

    // ---- moderation ----

    /// Add a ban record. Requires admin mode.
    pub fn ban(&mut self, name: &str, reason: &str) -> Result<BanRecord> {
        require_admin_mode(&self.session)?;
        Ok(self.moderation.ban(name, reason)?)
    }

    /// Remove a ban record. Requires admin mode.
    pub fn unban(&mut self, id: i64) -> Result<bool> {
        require_admin_mode(&self.session)?;
        Ok(self.moderation.unban(id))
    }

    /// The ban list. Requires admin mode.
    pub fn bans(&self) -> Result<&[BanRecord]> {
        require_admin_mode(&self.session)?;
        Ok(self.moderation.list())
    }

    /// Flip a topic flag. Requires admin mode.
    pub fn toggle_topic_flag(
        &mut self,
        section_id: &str,
        topic_id: i64,
        flag: TopicFlag,
    ) -> Result<Topic> {
        require_admin_mode(&self.session)?;
        Ok(self.catalog.toggle_topic_flag(section_id, topic_id, flag)?)
    }

    /// Rename the forum. Requires admin mode.
    pub fn rename_forum(&mut self, new_name: &str) -> Result<()> {
        require_admin_mode(&self.session)?;
        Ok(self.catalog.rename_forum(new_name)?)
    }

    // ---- catalog ----

    /// Sections filtered for the current viewer.
    pub fn sections(&self) -> Vec<Section> {
        self.catalog.list_sections(self.is_admin_view())
    }

    /// Front page counters.
    pub fn stats(&self) -> ForumStats {
        ForumStats {
            total_topics: self.catalog.total_topics(),
            total_posts: self.catalog.total_posts(),
            total_users: self.directory.len(),
            online_users: usize::from(self.session.is_authenticated()),
        }
    }

    /// Resolve a topic the viewer is allowed to see.
    ///
    /// Hidden topics resolve only for admin viewers.
    fn visible_topic<'a>(
        catalog: &'a ForumCatalog,
        section_id: &str,
        topic_id: i64,
        viewer_is_admin: bool,
    ) -> std::result::Result<&'a Topic, BoardError> {
        let topic = catalog.select_topic(section_id, topic_id)?;
        if topic.is_visible_to(viewer_is_admin) {
            Ok(topic)
        } else {
            Err(BoardError::topic_not_found(section_id, topic_id))
        }
    }

    /// Open a topic and remember the selection.
    pub fn open_topic(&mut self, section_id: &str, topic_id: i64) -> Result<Topic> {
        let topic =
            Self::visible_topic(&self.catalog, section_id, topic_id, self.is_admin_view())?
                .clone();
        self.selected = Some(TopicRef::new(section_id, topic_id));
        debug!(section_id = %section_id, topic_id, "Topic opened");
        Ok(topic)
    }

    /// Return to the section list.
    pub fn close_topic(&mut self) {
        self.selected = None;
    }

    /// The open topic, if it still resolves for the current viewer.
    pub fn selected_topic(&self) -> Option<&Topic> {
        let selected = self.selected.as_ref()?;
        Self::visible_topic(
            &self.catalog,
            &selected.section_id,
            selected.topic_id,
            self.is_admin_view(),
        )
        .ok()
    }

    // ---- threads ----

    /// Thread of a topic, created on first use.
    ///
    /// Threads are keyed by section and topic so that sections reusing a
    /// topic ID never share posts.
    fn thread_for<'a>(
        threads: &'a mut HashMap<TopicRef, TopicThread>,
        i18n: &I18n,
        section_id: &str,
        topic_id: i64,
    ) -> &'a mut TopicThread {
        threads
            .entry(TopicRef::new(section_id, topic_id))
            .or_insert_with(|| {
                TopicThread::new(topic_id, seed::welcome_posts(), i18n.t("forum.just_now"))
            })
    }

    /// Posts of a topic, filtered for the current viewer.
    pub fn posts(&self, section_id: &str, topic_id: i64) -> Result<Vec<Post>> {
        let viewer_is_admin = self.is_admin_view();
        let topic = Self::visible_topic(&self.catalog, section_id, topic_id, viewer_is_admin)?;
        Ok(match self.threads.get(&TopicRef::new(section_id, topic.id)) {
            Some(thread) => thread.list_posts(viewer_is_admin),
            None => seed::welcome_posts(),
        })
    }

    /// Append a post with an explicit author label.
    pub fn add_post(
        &mut self,
        section_id: &str,
        topic_id: i64,
        author: &str,
        content: &str,
    ) -> Result<Post> {
        let viewer_is_admin = self.is_admin_view();
        let topic = Self::visible_topic(&self.catalog, section_id, topic_id, viewer_is_admin)?;
        let thread = Self::thread_for(&mut self.threads, &self.i18n, section_id, topic.id);
        Ok(thread.add_post(topic, author, content)?)
    }

    /// Append a post signed with the current viewer's label.
    pub fn reply(&mut self, section_id: &str, topic_id: i64, content: &str) -> Result<Post> {
        let author = self.author_label();
        self.add_post(section_id, topic_id, &author, content)
    }

    /// Flip the hidden flag on a post. Requires admin mode.
    ///
    /// Returns `None` when the topic has no such post.
    pub fn toggle_post_hidden(
        &mut self,
        section_id: &str,
        topic_id: i64,
        post_id: i64,
    ) -> Result<Option<Post>> {
        require_admin_mode(&self.session)?;
        let topic = self.catalog.select_topic(section_id, topic_id)?;
        let thread = Self::thread_for(&mut self.threads, &self.i18n, section_id, topic.id);
        Ok(thread.toggle_post_hidden(post_id))
    }

    /// Label used for replies from the current viewer.
    ///
    /// Authenticated viewers sign with their username, admin mode without an
    /// identity signs as the admin label, anyone else gets `User_<n>`.
    pub fn author_label(&self) -> String {
        if let Some(account) = self.session.current_identity() {
            return account.username.clone();
        }
        if self.is_admin_view() {
            return self.i18n.t("forum.admin_label").to_string();
        }
        let number = rand::rng().random_range(0..1000).to_string();
        self.i18n
            .t_with("forum.anonymous_label", &[("number", number.as_str())])
    }

    /// State of the current screen for the presentation layer.
    pub fn snapshot(&self) -> ForumSnapshot {
        let identity = self.session.current_identity().cloned();
        let role_label = identity
            .as_ref()
            .map(|account| self.i18n.t(account.role.message_key()).to_string());
        ForumSnapshot {
            forum_name: self.catalog.forum_name().to_string(),
            admin_mode: self.is_admin_view(),
            identity,
            role_label,
            stats: self.stats(),
            sections: self.sections(),
            selected: self.selected.clone(),
        }
    }
}
