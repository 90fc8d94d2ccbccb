/// Database module for cmd-advisor
///
/// Holds the command index: which snap ships which command.
/// Uses SQLite through sqlx with connection pooling.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::{Database, DatabaseStats};
pub use models::*;
