//! Persistence and Migration Tests
//!
//! - Legacy bare-array blobs load with the documented defaults
//! - Version-2 envelopes round-trip unchanged
//! - Unreadable blobs recover as empty (and therefore reseed)
//! - First-run seeding is idempotent

use geodir::persist::{
    sample_records, BlobStore, MemoryBlobStore, PersistenceBridge, DIRECTORY_BLOB_KEY,
};
use geodir::store::RecordStore;

// =============================================================================
// Test Utilities
// =============================================================================

fn bridge_over(blob: &MemoryBlobStore) -> PersistenceBridge {
    PersistenceBridge::new(Box::new(blob.clone()))
}

const LEGACY_BLOB: &str = r#"[
  {
    "id": "legacy-1",
    "name": "Igreja Batista Central",
    "denomination": "Batista",
    "address": "Rua das Flores, 123",
    "city": "São Paulo",
    "state": "SP",
    "coordinates": {"lat": -23.5505, "lng": -46.6333},
    "responsible": "João Silva",
    "phone": "(11) 99999-9999",
    "email": "joao@igreja.com",
    "whatsapp": "(11) 99999-9999",
    "createdAt": "2023-06-01T10:00:00.000Z",
    "updatedAt": "2023-06-01T10:00:00.000Z"
  },
  {
    "id": "legacy-2",
    "name": "Igreja Pendente",
    "denomination": "Metodista",
    "address": "Rua Dois, 2",
    "city": "Rio de Janeiro",
    "state": "RJ",
    "coordinates": {"lat": 0, "lng": 0},
    "approved": false,
    "featured": true
  }
]"#;

// =============================================================================
// Legacy migration
// =============================================================================

#[test]
fn test_legacy_record_without_approved_loads_approved() {
    let blob = MemoryBlobStore::new();
    blob.set(DIRECTORY_BLOB_KEY, LEGACY_BLOB).unwrap();

    let records = bridge_over(&blob).load();
    let migrated = records.iter().find(|r| r.id == "legacy-1").unwrap();

    assert!(migrated.approved);
    assert!(!migrated.featured);
    assert!(migrated.schedules.is_empty());
}

#[test]
fn test_legacy_explicit_flags_preserved() {
    let blob = MemoryBlobStore::new();
    blob.set(DIRECTORY_BLOB_KEY, LEGACY_BLOB).unwrap();

    let records = bridge_over(&blob).load();
    let pending = records.iter().find(|r| r.id == "legacy-2").unwrap();

    assert!(!pending.approved);
    assert!(pending.featured);
}

#[test]
fn test_legacy_field_names_map_to_current_model() {
    let blob = MemoryBlobStore::new();
    blob.set(DIRECTORY_BLOB_KEY, LEGACY_BLOB).unwrap();

    let records = bridge_over(&blob).load();
    let migrated = records.iter().find(|r| r.id == "legacy-1").unwrap();

    assert_eq!(migrated.category, "Batista");
    assert_eq!(migrated.region, "SP");
    assert_eq!(migrated.contact.responsible, "João Silva");
}

#[test]
fn test_legacy_sentinel_coordinates_become_absent() {
    let blob = MemoryBlobStore::new();
    blob.set(DIRECTORY_BLOB_KEY, LEGACY_BLOB).unwrap();

    let records = bridge_over(&blob).load();

    let located = records.iter().find(|r| r.id == "legacy-1").unwrap();
    let unlocated = records.iter().find(|r| r.id == "legacy-2").unwrap();
    assert!(located.coordinates.is_some());
    assert!(unlocated.coordinates.is_none());
}

#[test]
fn test_migrated_collection_is_rewritten_in_current_layout() {
    let blob = MemoryBlobStore::new();
    blob.set(DIRECTORY_BLOB_KEY, LEGACY_BLOB).unwrap();

    // Opening the store hydrates from the legacy blob; the first
    // mutation persists the versioned envelope
    let mut store = RecordStore::open(bridge_over(&blob)).unwrap();
    store.approve("legacy-2").unwrap();

    let raw = blob.raw(DIRECTORY_BLOB_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 2);
    assert_eq!(value["records"].as_array().unwrap().len(), 2);
}

// =============================================================================
// Envelope round-trip
// =============================================================================

#[test]
fn test_envelope_roundtrip_preserves_records() {
    let blob = MemoryBlobStore::new();
    let bridge = bridge_over(&blob);
    let records = sample_records();

    bridge.save(&records).unwrap();
    assert_eq!(bridge.load(), records);
}

#[test]
fn test_envelope_approved_false_survives_roundtrip() {
    let blob = MemoryBlobStore::new();
    let bridge = bridge_over(&blob);
    let mut records = sample_records();
    records[0].approved = false;

    bridge.save(&records).unwrap();
    let loaded = bridge.load();

    assert!(!loaded[0].approved);
}

// =============================================================================
// Recovery and seeding
// =============================================================================

#[test]
fn test_unparseable_blob_recovers_as_reseeded_store() {
    let blob = MemoryBlobStore::new();
    blob.set(DIRECTORY_BLOB_KEY, "{{{ not json").unwrap();

    let store = RecordStore::open(bridge_over(&blob)).unwrap();

    assert_eq!(store.list().len(), 5);
}

#[test]
fn test_seeding_only_fires_on_empty_collection() {
    let blob = MemoryBlobStore::new();
    let mut store = RecordStore::open(bridge_over(&blob)).unwrap();
    let created = store.create(geodir::model::RecordDraft {
        name: "Sexta Igreja".to_string(),
        category: "Batista".to_string(),
        address: "Rua Seis, 6".to_string(),
        city: "Curitiba".to_string(),
        region: "PR".to_string(),
        ..Default::default()
    })
    .unwrap();
    drop(store);

    let reopened = RecordStore::open(bridge_over(&blob)).unwrap();

    assert_eq!(reopened.list().len(), 6);
    assert!(reopened.get_by_id(&created.id).is_some());
}

#[test]
fn test_deleting_every_record_then_reopening_reseeds() {
    let blob = MemoryBlobStore::new();
    let mut store = RecordStore::open(bridge_over(&blob)).unwrap();
    for record in store.list() {
        store.delete(&record.id).unwrap();
    }
    assert!(store.list().is_empty());
    drop(store);

    // An empty persisted collection counts as first-run again
    let reopened = RecordStore::open(bridge_over(&blob)).unwrap();
    assert_eq!(reopened.list().len(), 5);
}
