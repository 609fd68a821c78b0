//! Error types for provtag

use thiserror::Error;

/// Main error type for provtag
#[derive(Debug, Error)]
pub enum ProvenanceError {
    #[error("Entries of different type can't be appended: {left} != {right}.")]
    IncompatibleCategory { left: String, right: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ProvenanceError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ProvenanceError::Manifest(_) => 2,
            ProvenanceError::InvalidDate(_) => 3,
            ProvenanceError::IncompatibleCategory { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ProvenanceError::IncompatibleCategory { left, right } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Only merge sources that share a category ('{}' or '{}')\n\
                    • Leave 'category' unset on sources that should adopt the merged one",
                    self, left, right
                )
            }
            ProvenanceError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected either:\n\
                    • An ISO date: YYYY-MM-DD between 0001-01-01 and 9999-12-31\n\
                    • An ordinal day count between 1 and 3652059\n\n\
                    Examples:\n\
                    provtag str-to-date 2018-04-06\n\
                    provtag date-to-str 730000",
                    input
                )
            }
            ProvenanceError::Manifest(_) => {
                format!(
                    "{}\n\n\
                    Each [[source]] entry needs 'file_name' and 'description' \
                    given as strings or as arrays of equal length.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ProvenanceError
pub type Result<T> = std::result::Result<T, ProvenanceError>;
