//! Query execution
//!
//! Stateless: the engine never mutates its inputs and holds no state
//! between calls. Results are cloned snapshots in a deterministic order.

use std::cmp::Ordering;

use crate::geo::{distance_km, GeoPoint};
use crate::model::Record;

use super::spec::{QuerySpec, SortKey};

/// Runs query specs against collection snapshots.
pub struct QueryEngine;

impl QueryEngine {
    /// Execute `spec` over `records` and return the ordered result set.
    pub fn run(records: &[Record], spec: &QuerySpec) -> Vec<Record> {
        let mut results: Vec<Record> = records
            .iter()
            .filter(|r| !spec.only_approved || r.approved)
            .filter(|r| Self::within_radius(r, spec))
            .filter(|r| Self::matches_text(r, spec))
            .filter(|r| Self::matches_facets(r, spec))
            .cloned()
            .collect();

        Self::sort(&mut results, spec);
        results
    }

    /// Distance from `center` to a record, when the record is located.
    ///
    /// Callers use the `None` branch to suppress the distance display
    /// for records with an unknown location.
    pub fn distance_from(center: GeoPoint, record: &Record) -> Option<f64> {
        record.coordinates.map(|point| distance_km(center, point))
    }

    fn within_radius(record: &Record, spec: &QuerySpec) -> bool {
        let (Some(center), Some(radius)) = (spec.center, spec.radius_km) else {
            return true;
        };
        // Unlocated records cannot satisfy a proximity constraint
        match Self::distance_from(center, record) {
            Some(distance) => distance <= radius,
            None => false,
        }
    }

    fn matches_text(record: &Record, spec: &QuerySpec) -> bool {
        let Some(term) = spec.text.as_deref() else {
            return true;
        };
        let term = term.to_lowercase();
        [
            &record.name,
            &record.category,
            &record.city,
            &record.region,
            &record.address,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_facets(record: &Record, spec: &QuerySpec) -> bool {
        let contains = |field: &str, filter: &Option<String>| match filter.as_deref() {
            Some(filter) => field.to_lowercase().contains(&filter.to_lowercase()),
            None => true,
        };

        let day_matches = match spec.day.as_deref() {
            Some(day) => record.schedules.iter().any(|s| s.day_matches(day)),
            None => true,
        };

        contains(&record.city, &spec.city)
            && contains(&record.region, &spec.region)
            && contains(&record.category, &spec.category)
            && day_matches
    }

    fn sort(results: &mut [Record], spec: &QuerySpec) {
        let Some(key) = spec.sort else {
            return;
        };

        match key {
            SortKey::Name => Self::sort_by_field(results, |r| &r.name),
            SortKey::Category => Self::sort_by_field(results, |r| &r.category),
            SortKey::City => Self::sort_by_field(results, |r| &r.city),
            SortKey::Distance => {
                // Without a center the filter order stands
                if let Some(center) = spec.center {
                    results.sort_by(|a, b| {
                        Self::compare_distances(
                            Self::distance_from(center, a),
                            Self::distance_from(center, b),
                        )
                    });
                }
            }
        }
    }

    /// Stable, case-insensitive lexicographic sort; ties keep input order.
    fn sort_by_field(results: &mut [Record], field: impl Fn(&Record) -> &String) {
        results.sort_by(|a, b| {
            field(a)
                .to_lowercase()
                .cmp(&field(b).to_lowercase())
        });
    }

    /// Located records order by distance; unlocated records sort after
    /// every located one, keeping input order among themselves.
    fn compare_distances(a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
