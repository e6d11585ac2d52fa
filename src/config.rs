//! Configuration module for the forum.

use serde::Deserialize;
use std::path::Path;

use crate::auth::validation::MIN_USERNAME_LENGTH;
use crate::{datetime, i18n, ForumError, Result};

/// Forum information configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForumConfig {
    /// Initial forum title.
    #[serde(default = "default_forum_name")]
    pub name: String,
    /// Username of the seeded administrator account.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Only allow admin identities to toggle admin mode.
    #[serde(default)]
    pub strict_admin_mode: bool,
}

fn default_forum_name() -> String {
    "Game Forum".to_string()
}

fn default_admin_username() -> String {
    "Admin".to_string()
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            name: default_forum_name(),
            admin_username: default_admin_username(),
            strict_admin_mode: false,
        }
    }
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Language code (ru / en).
    #[serde(default = "default_language")]
    pub language: String,
    /// Timezone for date labels (e.g., "Europe/Moscow", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_language() -> String {
    "ru".to_string()
}

fn default_timezone() -> String {
    "Europe/Moscow".to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            timezone: default_timezone(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/gameforum.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Forum information.
    #[serde(default)]
    pub forum: ForumConfig,
    /// Locale configuration.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ForumError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ForumError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `GAMEFORUM_NAME`: Override the forum title
    /// - `GAMEFORUM_ADMIN_USERNAME`: Override the seeded admin username
    pub fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("GAMEFORUM_NAME") {
            if !name.trim().is_empty() {
                self.forum.name = name;
            }
        }
        if let Ok(admin) = std::env::var("GAMEFORUM_ADMIN_USERNAME") {
            if !admin.trim().is_empty() {
                self.forum.admin_username = admin;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.forum.name.trim().is_empty() {
            return Err(ForumError::Config("forum.name must not be empty".to_string()));
        }
        if self.forum.admin_username.trim().chars().count() < MIN_USERNAME_LENGTH {
            return Err(ForumError::Config(format!(
                "forum.admin_username must be at least {MIN_USERNAME_LENGTH} characters"
            )));
        }
        if !i18n::is_supported(&self.locale.language) {
            return Err(ForumError::Config(format!(
                "unsupported language: {}",
                self.locale.language
            )));
        }
        if !datetime::is_valid_timezone(&self.locale.timezone) {
            return Err(ForumError::Config(format!(
                "unknown timezone: {}",
                self.locale.timezone
            )));
        }
        Ok(())
    }
}
