/// cmd-advisor library
///
/// Suggests which snap to install when a command isn't found, including
/// commands that were mistyped by one character.

pub mod advisor;
pub mod config;
pub mod db;
pub mod error;
pub mod output;

// Re-exports for convenience
pub use advisor::{Advice, Advisor, Finder, Suggestion};
pub use config::Config;
pub use db::Database;
pub use error::{AdvisorError, Result};
