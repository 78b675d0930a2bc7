//! Legacy blob migration
//!
//! Earlier deployments persisted a bare JSON array of camelCase
//! records with flat contact fields and a `(0, 0)` coordinate sentinel
//! for "unknown location". That layout predates the moderation gate, so
//! records missing `approved` load as approved — pre-moderation data is
//! grandfathered in. Fields that are present are never overwritten.
//!
//! Migration defaults:
//! - `approved` absent → `true`
//! - `featured` absent → `false`
//! - `schedules` absent → empty
//! - coordinates `(0, 0)` → absent
//! - `id` absent → freshly assigned
//! - timestamps absent → load time

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::geo::GeoPoint;
use crate::model::{Contact, Record, Schedule};

/// Raw coordinate pair as persisted by the legacy layout.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub(crate) struct RawCoordinates {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

/// One record in the legacy bare-array layout.
///
/// Old field names are accepted alongside the current ones: `denomination`
/// for `category` and `state` for `region`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LegacyRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "denomination")]
    category: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    city: String,
    #[serde(default, alias = "state")]
    region: String,
    #[serde(default)]
    neighborhood: Option<String>,
    #[serde(default)]
    coordinates: RawCoordinates,
    #[serde(default)]
    responsible: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    whatsapp: String,
    #[serde(default)]
    schedules: Option<Vec<Schedule>>,
    #[serde(default)]
    approved: Option<bool>,
    #[serde(default)]
    featured: Option<bool>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Migrate a legacy record into the current layout.
pub(crate) fn migrate(legacy: LegacyRecord, now: DateTime<Utc>) -> Record {
    Record {
        id: legacy
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: legacy.name,
        category: legacy.category,
        address: legacy.address,
        city: legacy.city,
        region: legacy.region,
        neighborhood: legacy.neighborhood,
        coordinates: GeoPoint::from_raw(legacy.coordinates.lat, legacy.coordinates.lng),
        contact: Contact {
            responsible: legacy.responsible,
            phone: legacy.phone,
            email: legacy.email,
            whatsapp: legacy.whatsapp,
        },
        schedules: legacy.schedules.unwrap_or_default(),
        approved: legacy.approved.unwrap_or(true),
        featured: legacy.featured.unwrap_or(false),
        created_at: legacy.created_at.unwrap_or(now),
        updated_at: legacy.updated_at.unwrap_or(now),
    }
}
