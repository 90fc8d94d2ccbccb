/// Data models for database entities
///
/// All models map to database tables and use sqlx for type-safe queries.

use crate::advisor::Suggestion;
use crate::error::{AdvisorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::sync::OnceLock;

/// One command shipped by one snap
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IndexEntry {
    pub id: i64,
    pub snap: String,
    pub command: String,
    pub indexed_at: String, // ISO 8601 format from SQLite
}

impl TryFrom<IndexEntry> for Suggestion {
    type Error = AdvisorError;

    fn try_from(entry: IndexEntry) -> Result<Self> {
        Suggestion::new(entry.snap, entry.command)
    }
}

/// Input for adding a command to the index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexInput {
    pub snap: String,
    pub command: String,
}

// Snap names: lowercase letters, digits and hyphens, starting with a letter or digit
fn is_valid_snap_name(name: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

impl IndexInput {
    /// Reject names that can never match a lookup
    pub fn validate(&self) -> Result<()> {
        if !is_valid_snap_name(&self.snap) {
            return Err(AdvisorError::InvalidName(format!(
                "'{}' is not a valid snap name",
                self.snap
            )));
        }

        let command = self.command.trim();
        if command.is_empty() || command.len() != self.command.len() {
            return Err(AdvisorError::InvalidName(format!(
                "'{}' is not a valid command name",
                self.command
            )));
        }
        if command.contains(char::is_whitespace) || command.contains('/') {
            return Err(AdvisorError::InvalidName(format!(
                "command '{}' contains whitespace or '/'",
                self.command
            )));
        }

        Ok(())
    }
}
