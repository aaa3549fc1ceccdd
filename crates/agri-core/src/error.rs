//! Error Types for AgriAI Hub

use thiserror::Error;

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, AgriError>;

#[derive(Error, Debug)]
pub enum AgriError {
    /// Backing key/value store failed or is unavailable
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Signup attempted with an email that is already registered
    #[error("Email already exists: {0}")]
    EmailExists(String),

    /// A required form field was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Operation needs a signed-in user
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AgriError {
    /// Text shown in a toast
    pub fn user_message(&self) -> String {
        match self {
            Self::EmailExists(_) => "Email already exists".into(),
            Self::MissingField(field) => format!("Please fill in the {field} field"),
            Self::PasswordMismatch => "Passwords do not match".into(),
            Self::NotAuthenticated => "Please sign in to continue".into(),
            Self::Storage(_) => "Browser storage is unavailable. Please try again.".into(),
            Self::Export(_) => "Could not export data".into(),
            _ => "Something went wrong".into(),
        }
    }
}

impl From<csv::Error> for AgriError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AgriError::EmailExists("a@b.c".into()).user_message(),
            "Email already exists"
        );
        assert_eq!(AgriError::PasswordMismatch.user_message(), "Passwords do not match");
        assert!(AgriError::MissingField("email").user_message().contains("email"));
    }
}
