//! Directory record and draft types
//!
//! `Record` is the stored form: identifier and timestamps are assigned by
//! the store and never client-supplied. `RecordDraft` carries everything a
//! caller may set on creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

use super::schedule::Schedule;

/// Contact details for the person responsible for a record.
///
/// Opaque strings; format validation belongs to the form layer, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Responsible-person name
    pub responsible: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Messaging handle
    pub whatsapp: String,
}

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque unique identifier, immutable after creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Categorical attribute, e.g. a denomination
    pub category: String,
    /// Street address
    pub address: String,
    /// City name
    pub city: String,
    /// State or province
    pub region: String,
    /// Optional neighborhood
    #[serde(default)]
    pub neighborhood: Option<String>,
    /// Location in decimal degrees; `None` when unknown
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    /// Contact details
    #[serde(default)]
    pub contact: Contact,
    /// Recurring weekly schedule, possibly empty
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    /// Moderation gate: unapproved records are hidden from public queries
    #[serde(default)]
    pub approved: bool,
    /// Promotion flag, independent of `approved`
    #[serde(default)]
    pub featured: bool,
    /// Set by the store on creation
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Client-suppliable fields for a new record.
///
/// `approved` and `featured` default to `false` when unset; `schedules`
/// defaults to empty. The store assigns id and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
    pub region: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub schedules: Option<Vec<Schedule>>,
    #[serde(default)]
    pub approved: Option<bool>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl Record {
    /// Materialize a draft into a stored record.
    ///
    /// Applies the creation defaults: `approved` and `featured` fall back
    /// to `false`, `schedules` to empty. Both timestamps start at `now`.
    pub fn from_draft(draft: RecordDraft, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            address: draft.address,
            city: draft.city,
            region: draft.region,
            neighborhood: draft.neighborhood,
            coordinates: draft.coordinates,
            contact: draft.contact,
            schedules: draft.schedules.unwrap_or_default(),
            approved: draft.approved.unwrap_or(false),
            featured: draft.featured.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> RecordDraft {
        RecordDraft {
            name: "Igreja Batista Central".to_string(),
            category: "Batista".to_string(),
            address: "Rua das Flores, 123".to_string(),
            city: "São Paulo".to_string(),
            region: "SP".to_string(),
            coordinates: Some(GeoPoint::new(-23.5505, -46.6333)),
            ..RecordDraft::default()
        }
    }

    #[test]
    fn test_from_draft_applies_defaults() {
        let now = Utc::now();
        let record = Record::from_draft(sample_draft(), "rec-1".to_string(), now);

        assert_eq!(record.id, "rec-1");
        assert!(!record.approved);
        assert!(!record.featured);
        assert!(record.schedules.is_empty());
        assert_eq!(record.created_at, now);
        assert_eq!(record.updated_at, now);
    }

    #[test]
    fn test_from_draft_keeps_explicit_flags() {
        let draft = RecordDraft {
            approved: Some(true),
            featured: Some(true),
            schedules: Some(vec![Schedule::new("Domingo", vec!["09:00".into()])]),
            ..sample_draft()
        };
        let record = Record::from_draft(draft, "rec-2".to_string(), Utc::now());

        assert!(record.approved);
        assert!(record.featured);
        assert_eq!(record.schedules.len(), 1);
    }

    #[test]
    fn test_record_serde_backfills_optional_fields() {
        // A stored record with only the required fields still loads
        let json = r#"{
            "id": "rec-3",
            "name": "Igreja da Paz",
            "category": "Luterana",
            "address": "Rua da Paz, 200",
            "city": "Porto Alegre",
            "region": "RS",
            "created_at": "2024-01-10T12:00:00Z",
            "updated_at": "2024-01-10T12:00:00Z"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.coordinates.is_none());
        assert!(record.schedules.is_empty());
        assert!(!record.approved);
        assert!(!record.featured);
    }
}
