/// SQL query functions for the command index

use crate::db::models::*;
use crate::db::Database;
use crate::error::Result;
use tracing::debug;

impl Database {
    /// Add a command to the index
    ///
    /// Adding a pair that is already indexed is a no-op.
    ///
    /// # Returns
    /// * `Ok(true)` - The pair was new
    /// * `Ok(false)` - The pair was already indexed
    /// * `Err(AdvisorError)` - Invalid names or database failure
    pub async fn add_command(&self, input: IndexInput) -> Result<bool> {
        input.validate()?;

        let result = sqlx::query(
            r#"
            INSERT INTO commands (snap, command)
            VALUES (?, ?)
            ON CONFLICT(snap, command) DO NOTHING
            "#,
        )
        .bind(&input.snap)
        .bind(&input.command)
        .execute(self.pool())
        .await?;

        let added = result.rows_affected() > 0;
        debug!(snap = %input.snap, command = %input.command, added, "index add");

        Ok(added)
    }

    /// Get every snap providing exactly `command`, oldest entry first
    pub async fn find_by_command(&self, command: &str) -> Result<Vec<IndexEntry>> {
        let entries = sqlx::query_as::<_, IndexEntry>(
            "SELECT * FROM commands WHERE command = ? ORDER BY id ASC",
        )
        .bind(command)
        .fetch_all(self.pool())
        .await?;

        Ok(entries)
    }

    /// Drop every command of a snap
    ///
    /// # Returns
    /// * `Ok(u64)` - How many entries were removed
    pub async fn remove_snap(&self, snap: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM commands WHERE snap = ?")
            .bind(snap)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected())
    }

    /// List index entries
    ///
    /// # Arguments
    /// * `snap` - Optional snap filter (None for the whole index)
    pub async fn list_entries(&self, snap: Option<&str>) -> Result<Vec<IndexEntry>> {
        let entries = if let Some(snap) = snap {
            sqlx::query_as::<_, IndexEntry>(
                "SELECT * FROM commands WHERE snap = ? ORDER BY command ASC",
            )
            .bind(snap)
            .fetch_all(self.pool())
            .await?
        } else {
            sqlx::query_as::<_, IndexEntry>(
                "SELECT * FROM commands ORDER BY snap ASC, command ASC",
            )
            .fetch_all(self.pool())
            .await?
        };

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    fn input(snap: &str, command: &str) -> IndexInput {
        IndexInput {
            snap: snap.to_string(),
            command: command.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_and_find_command() {
        let db = Database::new_test().await.unwrap();

        assert!(db.add_command(input("hello", "hello")).await.unwrap());
        assert!(db.add_command(input("hello-wcm", "hello")).await.unwrap());

        let found = db.find_by_command("hello").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].snap, "hello");
        assert_eq!(found[1].snap, "hello-wcm");
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let db = Database::new_test().await.unwrap();

        assert!(db.add_command(input("hello", "hello")).await.unwrap());
        assert!(!db.add_command(input("hello", "hello")).await.unwrap());

        assert_eq!(db.stats().await.unwrap().total_commands, 1);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_input() {
        let db = Database::new_test().await.unwrap();

        let err = db.add_command(input("", "hello")).await.unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidName(_)));
        assert_eq!(db.stats().await.unwrap().total_commands, 0);
    }

    #[tokio::test]
    async fn test_find_is_exact() {
        let db = Database::new_test().await.unwrap();
        db.add_command(input("hello", "hello")).await.unwrap();

        assert!(db.find_by_command("hell").await.unwrap().is_empty());
        assert!(db.find_by_command("HELLO").await.unwrap().is_empty());
        assert!(db.find_by_command("%").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_snap() {
        let db = Database::new_test().await.unwrap();
        db.add_command(input("vlc", "vlc")).await.unwrap();
        db.add_command(input("vlc", "vlc.cvlc")).await.unwrap();
        db.add_command(input("hello", "hello")).await.unwrap();

        assert_eq!(db.remove_snap("vlc").await.unwrap(), 2);
        assert_eq!(db.remove_snap("vlc").await.unwrap(), 0);

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.total_commands, 1);
        assert_eq!(stats.total_snaps, 1);
    }

    #[tokio::test]
    async fn test_list_entries() {
        let db = Database::new_test().await.unwrap();
        db.add_command(input("vlc", "vlc.cvlc")).await.unwrap();
        db.add_command(input("vlc", "vlc")).await.unwrap();
        db.add_command(input("hello", "hello")).await.unwrap();

        let all = db.list_entries(None).await.unwrap();
        let pairs: Vec<(&str, &str)> = all
            .iter()
            .map(|e| (e.snap.as_str(), e.command.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("hello", "hello"), ("vlc", "vlc"), ("vlc", "vlc.cvlc")]
        );

        let vlc = db.list_entries(Some("vlc")).await.unwrap();
        assert_eq!(vlc.len(), 2);
    }
}
