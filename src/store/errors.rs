//! Store error types

use thiserror::Error;

use crate::persist::PersistError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// The only failure a mutation can report is a persistence failure; in
/// that case the in-memory collection is guaranteed unchanged and no
/// subscriber has been notified.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The blob store refused or failed the write
    #[error("persistence failed: {0}")]
    Persist(#[from] PersistError),
}
