//! User-facing error taxonomy for the tracker core.
//!
//! Persistence failures travel as `anyhow::Error` from the snapshot store and
//! are downgraded to warnings by the tracker; they have no variant here.

use thiserror::Error;

/// Rejected input, raised before any state change
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a task name")]
    BlankName,

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    #[error("Invalid accent color: {0} (expected #RRGGBB)")]
    AccentColor(String),

    #[error("Invalid deadline: {0} (expected YYYY-MM-DD)")]
    Deadline(String),
}

/// Rejected import document; nothing is replaced
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid backup file format")]
    MissingKeys,

    #[error("Failed to import data. Invalid file format.")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::BlankName.to_string(), "Please enter a task name");
        assert_eq!(
            ValidationError::NotPositive { field: "Focus duration" }.to_string(),
            "Focus duration must be a positive number"
        );
        assert_eq!(ImportError::MissingKeys.to_string(), "Invalid backup file format");
    }
}
