//! Internationalization (i18n) module for the forum.
//!
//! Message catalogs are TOML tables flattened into dot-separated keys.
//! The `ru` and `en` catalogs are compiled into the binary.
//!
//! # Usage
//!
//! ```
//! use gameforum::i18n::I18n;
//!
//! let i18n = I18n::builtin("en").unwrap();
//! assert_eq!(i18n.t("moderation.default_reason"), "Rule violation");
//!
//! let label = i18n.t_with("forum.anonymous_label", &[("number", "42")]);
//! assert_eq!(label, "User_42");
//! ```

use std::collections::HashMap;

use thiserror::Error;

/// Default locale.
pub const DEFAULT_LOCALE: &str = "ru";

/// Locales shipped with the crate.
pub const SUPPORTED_LOCALES: &[&str] = &["ru", "en"];

const RU_MESSAGES: &str = include_str!("../../locales/ru.toml");
const EN_MESSAGES: &str = include_str!("../../locales/en.toml");

/// I18n-related errors.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse TOML.
    #[error("Failed to parse locale catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Locale not found.
    #[error("Locale not found: {0}")]
    LocaleNotFound(String),
}

/// Result type for i18n operations.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Check whether a locale has a built-in catalog.
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// Message catalog for a single locale.
#[derive(Debug, Clone)]
pub struct I18n {
    /// Current locale (e.g., "ru", "en").
    locale: String,
    /// Flattened message map (key -> value).
    messages: HashMap<String, String>,
}

impl I18n {
    /// Load one of the built-in catalogs.
    ///
    /// # Errors
    ///
    /// Returns `LocaleNotFound` for locales outside [`SUPPORTED_LOCALES`].
    pub fn builtin(locale: &str) -> Result<Self> {
        let content = match locale {
            "ru" => RU_MESSAGES,
            "en" => EN_MESSAGES,
            other => return Err(I18nError::LocaleNotFound(other.to_string())),
        };
        Self::parse(locale, content)
    }

    /// Create an I18n instance from a TOML string.
    pub fn parse(locale: &str, content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;

        let mut messages = HashMap::new();
        flatten_toml("", &toml::Value::Table(table), &mut messages);

        Ok(Self {
            locale: locale.to_string(),
            messages,
        })
    }

    /// Create an empty I18n instance.
    ///
    /// All translations will return the key itself.
    pub fn empty(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            messages: HashMap::new(),
        }
    }

    /// Get the current locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Get the number of loaded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if no messages are loaded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Translate a key to the current locale.
    ///
    /// If the key is not found, returns the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(|s| s.as_str()).unwrap_or(key)
    }

    /// Translate a key with parameter substitution.
    ///
    /// Parameters in the translation are marked as `{{name}}`.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut result = self.t(key).to_string();

        for (name, value) in params {
            let placeholder = format!("{{{{{name}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }

    /// Check if a translation key exists.
    pub fn has_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Get a translation with a fallback.
    pub fn t_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.messages
            .get(key)
            .map(|s| s.as_str())
            .unwrap_or(fallback)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::builtin(DEFAULT_LOCALE).unwrap_or_else(|_| Self::empty(DEFAULT_LOCALE))
    }
}

/// Flatten a TOML value into a HashMap with dot-separated keys.
fn flatten_toml(prefix: &str, value: &toml::Value, map: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_toml(&new_prefix, val, map);
            }
        }
        toml::Value::String(s) => {
            map.insert(prefix.to_string(), s.clone());
        }
        toml::Value::Integer(i) => {
            map.insert(prefix.to_string(), i.to_string());
        }
        toml::Value::Boolean(b) => {
            map.insert(prefix.to_string(), b.to_string());
        }
        // Other value kinds carry no messages.
        _ => {}
    }
}
