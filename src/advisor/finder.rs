/// Command finders
///
/// A finder answers one question: which snaps ship a command with exactly
/// this name. The advisor only ever talks to this trait.

use crate::db::Database;
use crate::error::{AdvisorError, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A command provided by a snap
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Suggestion {
    snap: String,
    command: String,
}

impl Suggestion {
    /// Build a suggestion, rejecting empty names
    pub fn new(snap: impl Into<String>, command: impl Into<String>) -> Result<Self> {
        let snap = snap.into();
        let command = command.into();

        if snap.is_empty() {
            return Err(AdvisorError::InvalidName("empty snap name".to_string()));
        }
        if command.is_empty() {
            return Err(AdvisorError::InvalidName("empty command name".to_string()));
        }

        Ok(Self { snap, command })
    }

    /// Name of the snap that provides the command
    pub fn snap(&self) -> &str {
        &self.snap
    }

    /// Name of the command inside the snap
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Looks up snaps by exact command name
///
/// An unknown command is `Ok(vec![])`, not an error. Errors mean the
/// backend itself could not answer.
#[async_trait]
pub trait Finder: Send + Sync {
    async fn find(&self, command: &str) -> Result<Vec<Suggestion>>;
}

/// Finder used when no index has been wired up
#[derive(Debug, Default, Clone, Copy)]
pub struct NotImplementedFinder;

#[async_trait]
impl Finder for NotImplementedFinder {
    async fn find(&self, _command: &str) -> Result<Vec<Suggestion>> {
        Err(AdvisorError::NotImplemented)
    }
}

/// Finder backed by the SQLite command index
pub struct SqliteFinder {
    db: Arc<Database>,
}

impl SqliteFinder {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Finder for SqliteFinder {
    async fn find(&self, command: &str) -> Result<Vec<Suggestion>> {
        let entries = self.db.find_by_command(command).await?;
        debug!(command, hits = entries.len(), "index lookup");

        entries.into_iter().map(Suggestion::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::IndexInput;

    #[test]
    fn test_suggestion_rejects_empty_names() {
        assert!(Suggestion::new("", "hello").is_err());
        assert!(Suggestion::new("hello", "").is_err());

        let s = Suggestion::new("hello-wcm", "hello").unwrap();
        assert_eq!(s.snap(), "hello-wcm");
        assert_eq!(s.command(), "hello");
    }

    #[test]
    fn test_suggestion_equality_is_structural() {
        let a = Suggestion::new("hello", "hello").unwrap();
        let b = Suggestion::new("hello", "hello").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Suggestion::new("hello-wcm", "hello").unwrap());
    }

    #[test]
    fn test_suggestion_json_shape() {
        let s = Suggestion::new("hello", "hello").unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"Snap":"hello","Command":"hello"}"#);
    }

    #[tokio::test]
    async fn test_not_implemented_finder() {
        let err = NotImplementedFinder.find("hello").await.unwrap_err();
        assert!(matches!(err, AdvisorError::NotImplemented));
    }

    #[tokio::test]
    async fn test_sqlite_finder() {
        let db = Arc::new(Database::new_test().await.unwrap());

        for snap in ["hello", "hello-wcm"] {
            db.add_command(IndexInput {
                snap: snap.to_string(),
                command: "hello".to_string(),
            })
            .await
            .unwrap();
        }

        let finder = SqliteFinder::new(db);

        let found = finder.find("hello").await.unwrap();
        assert_eq!(
            found,
            vec![
                Suggestion::new("hello", "hello").unwrap(),
                Suggestion::new("hello-wcm", "hello").unwrap(),
            ]
        );

        assert!(finder.find("helo").await.unwrap().is_empty());
    }
}
