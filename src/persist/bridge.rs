//! Persistence bridge between the store and the blob boundary
//!
//! The collection is persisted as one JSON blob: a versioned envelope
//! `{"version": 2, "records": [...]}`. A bare JSON array is the legacy
//! version-1 layout and goes through the migration pass on load.
//!
//! Loading never fails: unreadable or unparseable blobs are recovered as
//! an empty collection with a WARN log line. Saving propagates errors so
//! the store can refuse to commit a mutation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::Record;
use crate::observability::Logger;

use super::blob::BlobStore;
use super::errors::PersistResult;
use super::migration::{migrate, LegacyRecord};
use super::seed::sample_records;

/// Blob key holding the directory collection.
pub const DIRECTORY_BLOB_KEY: &str = "directory";

/// Current envelope layout version.
pub const ENVELOPE_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    records: Vec<Record>,
}

/// Serializes and deserializes the collection through a blob store.
pub struct PersistenceBridge {
    blob: Box<dyn BlobStore>,
    key: String,
}

impl PersistenceBridge {
    /// Create a bridge over `blob` using the default directory key.
    pub fn new(blob: Box<dyn BlobStore>) -> Self {
        Self::with_key(blob, DIRECTORY_BLOB_KEY)
    }

    /// Create a bridge with an explicit blob key.
    pub fn with_key(blob: Box<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            blob,
            key: key.into(),
        }
    }

    /// Load the collection, recovering any failure as empty.
    pub fn load(&self) -> Vec<Record> {
        let raw = match self.blob.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                Logger::warn(
                    "BLOB_READ_FAILED",
                    &[("key", self.key.as_str()), ("error", &e.to_string())],
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) if value.is_array() => self.load_legacy(value),
            Ok(value) => self.load_envelope(value),
            Err(e) => {
                Logger::warn(
                    "BLOB_PARSE_FAILED",
                    &[("key", self.key.as_str()), ("error", &e.to_string())],
                );
                Vec::new()
            }
        }
    }

    fn load_envelope(&self, value: serde_json::Value) -> Vec<Record> {
        let envelope: Envelope = match serde_json::from_value(value) {
            Ok(envelope) => envelope,
            Err(e) => {
                Logger::warn(
                    "BLOB_PARSE_FAILED",
                    &[("key", self.key.as_str()), ("error", &e.to_string())],
                );
                return Vec::new();
            }
        };

        if envelope.version != ENVELOPE_VERSION {
            Logger::warn(
                "BLOB_VERSION_UNSUPPORTED",
                &[
                    ("key", self.key.as_str()),
                    ("version", &envelope.version.to_string()),
                ],
            );
            return Vec::new();
        }

        envelope.records
    }

    fn load_legacy(&self, value: serde_json::Value) -> Vec<Record> {
        let legacy: Vec<LegacyRecord> = match serde_json::from_value(value) {
            Ok(legacy) => legacy,
            Err(e) => {
                Logger::warn(
                    "BLOB_PARSE_FAILED",
                    &[("key", self.key.as_str()), ("error", &e.to_string())],
                );
                return Vec::new();
            }
        };

        let now = Utc::now();
        let records: Vec<Record> = legacy.into_iter().map(|l| migrate(l, now)).collect();
        Logger::info(
            "LEGACY_BLOB_MIGRATED",
            &[
                ("key", self.key.as_str()),
                ("records", &records.len().to_string()),
            ],
        );
        records
    }

    /// Persist the full collection.
    pub fn save(&self, records: &[Record]) -> PersistResult<()> {
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            records: records.to_vec(),
        };
        let raw = serde_json::to_string(&envelope)?;
        self.blob.set(&self.key, &raw)
    }

    /// Load the collection, seeding the demonstration dataset when empty.
    ///
    /// Seed writes go through [`save`](Self::save), so a failing blob
    /// store surfaces here rather than at the first mutation.
    pub fn hydrate(&self) -> PersistResult<Vec<Record>> {
        let records = self.load();
        if !records.is_empty() {
            return Ok(records);
        }

        let seeded = sample_records();
        self.save(&seeded)?;
        Logger::info(
            "DIRECTORY_SEEDED",
            &[
                ("key", self.key.as_str()),
                ("records", &seeded.len().to_string()),
            ],
        );
        Ok(seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::blob::MemoryBlobStore;

    fn bridge_over(store: &MemoryBlobStore) -> PersistenceBridge {
        PersistenceBridge::new(Box::new(store.clone()))
    }

    #[test]
    fn test_load_missing_blob_is_empty() {
        let store = MemoryBlobStore::new();
        assert!(bridge_over(&store).load().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let store = MemoryBlobStore::new();
        store.set(DIRECTORY_BLOB_KEY, "not json {").unwrap();

        assert!(bridge_over(&store).load().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemoryBlobStore::new();
        let bridge = bridge_over(&store);
        let records = sample_records();

        bridge.save(&records).unwrap();
        let loaded = bridge.load();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_writes_versioned_envelope() {
        let store = MemoryBlobStore::new();
        bridge_over(&store).save(&sample_records()).unwrap();

        let raw = store.raw(DIRECTORY_BLOB_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 2);
        assert!(value["records"].is_array());
    }

    #[test]
    fn test_load_legacy_array_migrates() {
        let store = MemoryBlobStore::new();
        store
            .set(
                DIRECTORY_BLOB_KEY,
                r#"[{"name": "Igreja Batista Central", "denomination": "Batista",
                     "city": "São Paulo", "state": "SP",
                     "coordinates": {"lat": 0, "lng": 0}}]"#,
            )
            .unwrap();

        let loaded = bridge_over(&store).load();

        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].approved);
        assert_eq!(loaded[0].category, "Batista");
        assert!(loaded[0].coordinates.is_none());
    }

    #[test]
    fn test_load_unsupported_version_is_empty() {
        let store = MemoryBlobStore::new();
        store
            .set(DIRECTORY_BLOB_KEY, r#"{"version": 99, "records": []}"#)
            .unwrap();

        assert!(bridge_over(&store).load().is_empty());
    }

    #[test]
    fn test_hydrate_seeds_empty_store() {
        let store = MemoryBlobStore::new();
        let records = bridge_over(&store).hydrate().unwrap();

        assert_eq!(records.len(), 5);
        // Seed is persisted
        assert!(store.raw(DIRECTORY_BLOB_KEY).is_some());
    }

    #[test]
    fn test_hydrate_is_idempotent() {
        let store = MemoryBlobStore::new();
        let bridge = bridge_over(&store);

        let first = bridge.hydrate().unwrap();
        let second = bridge.hydrate().unwrap();

        // Same records both times, not a second seeding
        assert_eq!(first, second);
    }

    #[test]
    fn test_hydrate_does_not_seed_populated_store() {
        let store = MemoryBlobStore::new();
        let bridge = bridge_over(&store);
        let mut records = sample_records();
        records.truncate(2);
        bridge.save(&records).unwrap();

        let loaded = bridge.hydrate().unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_hydrate_propagates_seed_write_failure() {
        let store = MemoryBlobStore::new();
        store.set_fail_writes(true);

        assert!(bridge_over(&store).hydrate().is_err());
    }
}
