//! The authoritative record collection

use chrono::Utc;
use uuid::Uuid;

use crate::model::{Record, RecordDraft};
use crate::persist::PersistenceBridge;

use super::errors::StoreResult;
use super::subscribers::SubscriberRegistry;

/// Owns the directory collection and mediates every mutation.
///
/// Reads return cloned snapshots; no caller holds a mutable reference
/// into the live collection across calls.
pub struct RecordStore {
    records: Vec<Record>,
    bridge: PersistenceBridge,
    subscribers: SubscriberRegistry,
}

impl RecordStore {
    /// Open a store over `bridge`, hydrating the collection (load,
    /// migrate, seed-if-empty).
    pub fn open(bridge: PersistenceBridge) -> StoreResult<Self> {
        let records = bridge.hydrate()?;
        Ok(Self {
            records,
            bridge,
            subscribers: SubscriberRegistry::new(),
        })
    }

    /// Persist `working`, then swap it in and notify. On a failed save
    /// the live collection is untouched and nobody is notified.
    fn commit(&mut self, working: Vec<Record>) -> StoreResult<()> {
        self.bridge.save(&working)?;
        self.records = working;
        self.subscribers.notify_all(&self.records);
        Ok(())
    }

    /// Create a record from a draft.
    ///
    /// Assigns a fresh id, sets both timestamps to now, and applies the
    /// creation defaults (`approved`/`featured` false, empty schedules).
    /// Returns the stored record.
    pub fn create(&mut self, draft: RecordDraft) -> StoreResult<Record> {
        let record = Record::from_draft(draft, Uuid::new_v4().to_string(), Utc::now());

        let mut working = self.records.clone();
        working.push(record.clone());
        self.commit(working)?;

        Ok(record)
    }

    /// Replace the record matching `record.id`, refreshing `updated_at`.
    ///
    /// `created_at` is preserved from the stored record. Silently a no-op
    /// when the id is unknown.
    pub fn update(&mut self, mut record: Record) -> StoreResult<()> {
        let Some(index) = self.position(&record.id) else {
            return Ok(());
        };

        record.created_at = self.records[index].created_at;
        record.updated_at = Utc::now();

        let mut working = self.records.clone();
        working[index] = record;
        self.commit(working)
    }

    /// Remove the record with `id`. No-op when absent.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };

        let mut working = self.records.clone();
        working.remove(index);
        self.commit(working)
    }

    /// Open the moderation gate for `id`. Idempotent; no-op when absent.
    pub fn approve(&mut self, id: &str) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };

        let mut working = self.records.clone();
        working[index].approved = true;
        working[index].updated_at = Utc::now();
        self.commit(working)
    }

    /// Set the promotion flag for `id`, or toggle it when `value` is
    /// `None`. No-op when absent.
    pub fn set_featured(&mut self, id: &str, value: Option<bool>) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };

        let mut working = self.records.clone();
        working[index].featured = value.unwrap_or(!working[index].featured);
        working[index].updated_at = Utc::now();
        self.commit(working)
    }

    /// Fetch a record by id.
    pub fn get_by_id(&self, id: &str) -> Option<Record> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    /// Snapshot of the full collection.
    pub fn list(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Snapshot of the approved records.
    pub fn list_approved(&self) -> Vec<Record> {
        self.records.iter().filter(|r| r.approved).cloned().collect()
    }

    /// Snapshot of the approved and featured records.
    pub fn list_featured(&self) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.approved && r.featured)
            .cloned()
            .collect()
    }

    /// Register a change listener.
    ///
    /// The listener fires once immediately with the current snapshot,
    /// then synchronously after every successful mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&[Record]) + 'static) {
        subscriber(&self.records);
        self.subscribers.register(Box::new(subscriber));
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}
