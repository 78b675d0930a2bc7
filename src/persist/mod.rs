//! Persistence subsystem for geodir
//!
//! Durability is delegated to an external key-value blob store consumed
//! as get/set of a single raw string blob. The bridge owns the JSON
//! envelope layout, the legacy migration pass, and first-run seeding.
//!
//! # Load behavior
//!
//! - Missing blob: empty collection
//! - Version-2 envelope: records load as stored
//! - Bare JSON array: legacy layout, migrated with documented defaults
//! - Anything unreadable: empty collection, logged, never an error
//!
//! # Write behavior
//!
//! Write failures propagate. The store's transactional mutations depend
//! on that: no commit and no notification happens on a failed save.

mod blob;
mod bridge;
mod errors;
mod migration;
mod seed;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use bridge::{PersistenceBridge, DIRECTORY_BLOB_KEY, ENVELOPE_VERSION};
pub use errors::{PersistError, PersistResult};
pub use seed::sample_records;
