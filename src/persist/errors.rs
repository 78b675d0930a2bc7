//! Persistence error types

use thiserror::Error;

/// Result type for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence errors
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem failure while reading or writing a blob
    #[error("I/O failure on blob '{key}': {source}")]
    Io {
        /// Blob key involved
        key: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be serialized
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The blob store refused the write (e.g. storage quota)
    #[error("blob store rejected write for '{key}': {reason}")]
    WriteRejected {
        /// Blob key involved
        key: String,
        /// Store-supplied reason
        reason: String,
    },
}

impl PersistError {
    /// Wrap an I/O error with its blob key
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Build a rejected-write error
    pub fn write_rejected(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WriteRejected {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
