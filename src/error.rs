/// Error types for cmd-advisor
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for cmd-advisor operations
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// The active finder has no backend behind it
    #[error("not implemented")]
    NotImplemented,

    /// A finder failed to answer a lookup
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Empty or malformed snap/command name
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

/// Result type alias for cmd-advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

impl From<toml::de::Error> for AdvisorError {
    fn from(e: toml::de::Error) -> Self {
        AdvisorError::Config(e.to_string())
    }
}

/// Convert AdvisorError to a user-friendly error message
impl AdvisorError {
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::NotImplemented => {
                "No command index is configured, cannot look up commands".to_string()
            }
            AdvisorError::Lookup(msg) => {
                format!("Command lookup failed. Details: {}", msg)
            }
            AdvisorError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            AdvisorError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            AdvisorError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            AdvisorError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            AdvisorError::InvalidName(reason) => {
                format!("Invalid name: {}", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = AdvisorError::Lookup("get failed".to_string());
        assert!(err.user_message().contains("get failed"));

        let err = AdvisorError::NotImplemented;
        assert!(err.user_message().contains("index"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(AdvisorError::NotImplemented.to_string(), "not implemented");

        let err = AdvisorError::InvalidName("empty snap name".to_string());
        assert!(err.to_string().contains("Invalid name"));
    }

    #[test]
    fn test_toml_error_becomes_config() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let err: AdvisorError = parsed.unwrap_err().into();
        assert!(matches!(err, AdvisorError::Config(_)));
    }
}
