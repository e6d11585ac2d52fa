//! Ban list management for administrators.
//!
//! Ban records are keyed by display name only. They are not linked to
//! accounts or to the `author_banned` flag on topics.

use serde::Serialize;
use tracing::{debug, info};

use crate::datetime::{self, IdSequence};

use super::ModerationError;

/// A single entry in the ban list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BanRecord {
    /// Unique ID derived from the creation timestamp.
    pub id: i64,
    /// Banned display name.
    pub name: String,
    /// Reason shown in the admin panel.
    pub reason: String,
    /// Ban date label (`dd.mm.yyyy`).
    pub date: String,
}

/// In-memory ban list.
#[derive(Debug, Clone)]
pub struct ModerationStore {
    records: Vec<BanRecord>,
    ids: IdSequence,
    default_reason: String,
    timezone: String,
}

impl ModerationStore {
    /// Create an empty ban list.
    ///
    /// # Arguments
    ///
    /// * `default_reason` - Reason recorded when the admin leaves it blank
    /// * `timezone` - Timezone used for ban date labels
    pub fn new(default_reason: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            ids: IdSequence::new(),
            default_reason: default_reason.into(),
            timezone: timezone.into(),
        }
    }

    /// Add a ban record.
    ///
    /// The name is trimmed and must not be empty. A blank reason is replaced
    /// by the default reason.
    pub fn ban(&mut self, name: &str, reason: &str) -> Result<BanRecord, ModerationError> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ban rejected: empty name");
            return Err(ModerationError::EmptyName);
        }

        let reason = match reason.trim() {
            "" => self.default_reason.clone(),
            r => r.to_string(),
        };

        let record = BanRecord {
            id: self.ids.next_id(),
            name: name.to_string(),
            reason,
            date: datetime::today_label(&self.timezone),
        };
        self.records.push(record.clone());

        info!(
            ban_id = record.id,
            name = %record.name,
            reason = %record.reason,
            "User banned"
        );

        Ok(record)
    }

    /// Remove a ban record by ID.
    ///
    /// Returns `true` if a record was removed.
    pub fn unban(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;

        if removed {
            info!(ban_id = id, "User unbanned");
        } else {
            debug!(ban_id = id, "Unban ignored: no such record");
        }

        removed
    }

    /// All ban records in insertion order.
    pub fn list(&self) -> &[BanRecord] {
        &self.records
    }

    /// Get a ban record by ID.
    pub fn get(&self, id: i64) -> Option<&BanRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check if a display name appears on the ban list, ignoring case.
    pub fn is_banned(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.records.iter().any(|r| r.name.to_lowercase() == name)
    }

    /// Number of ban records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ban list is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reason recorded when none is given.
    pub fn default_reason(&self) -> &str {
        &self.default_reason
    }
}
