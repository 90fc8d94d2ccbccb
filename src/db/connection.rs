/// Command index database
///
/// One SQLite file holding which snap ships which command.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

// Lookups are sequential, a couple of connections is plenty
const MAX_CONNECTIONS: u32 = 2;

#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl Database {
    /// Open the index at `db_path`, creating the file and its directory if needed
    ///
    /// # Examples
    /// ```no_run
    /// use cmd_advisor_lib::db::Database;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::new("/var/cache/cmd-advisor/commands.db").await?;
    /// let hits = db.find_by_command("hello").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Taken as a plain filename, so '?' or '#' in the path stay literal
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        debug!(path = %db_path.display(), "opened command index");

        let db = Self {
            pool: Arc::new(pool),
            db_path,
        };
        db.initialize_schema().await?;

        Ok(db)
    }

    /// Fresh in-memory index for tests
    #[cfg(test)]
    pub async fn new_test() -> Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        // A single connection, otherwise each one gets its own empty memory db
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path: PathBuf::from(":memory:"),
        };
        db.initialize_schema().await?;

        Ok(db)
    }

    async fn initialize_schema(&self) -> Result<()> {
        let schema = include_str!("../../database/schema.sql");

        // SQLite doesn't support multiple statements in execute
        for statement in schema.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(self.pool()).await?;
            }
        }

        Ok(())
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Count what's in the index
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let (total_commands, total_snaps): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COUNT(DISTINCT snap) FROM commands")
                .fetch_one(self.pool())
                .await?;

        Ok(DatabaseStats {
            total_commands,
            total_snaps,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseStats {
    /// Indexed (snap, command) pairs
    pub total_commands: i64,
    /// Distinct snaps with at least one command
    pub total_snaps: i64,
}
