//! Query specification types

use std::str::FromStr;

use crate::geo::GeoPoint;

/// Sort key for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// By record name
    Name,
    /// By category
    Category,
    /// By city
    City,
    /// By distance from the query center; requires a center to have
    /// any effect
    Distance,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "city" => Ok(SortKey::City),
            "distance" => Ok(SortKey::Distance),
            other => Err(format!(
                "unknown sort key '{}' (expected name, category, city, or distance)",
                other
            )),
        }
    }
}

/// A query against a collection snapshot. Every field is optional;
/// the default spec matches everything in input order.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    /// Free-text term matched case-insensitively as a substring over
    /// name, category, city, region, and address
    pub text: Option<String>,
    /// City facet, case-insensitive substring
    pub city: Option<String>,
    /// Region facet, case-insensitive substring
    pub region: Option<String>,
    /// Category facet, case-insensitive substring
    pub category: Option<String>,
    /// Schedule-day facet: at least one schedule day must contain this,
    /// case-insensitively
    pub day: Option<String>,
    /// Restrict the base set to approved records
    pub only_approved: bool,
    /// Reference point for proximity filtering and distance sorting
    pub center: Option<GeoPoint>,
    /// Proximity radius; only effective together with `center`
    pub radius_km: Option<f64>,
    /// Result ordering; `None` preserves filter order
    pub sort: Option<SortKey>,
}

impl QuerySpec {
    /// A spec that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the radius filter applies.
    pub fn proximity_mode(&self) -> bool {
        self.center.is_some() && self.radius_km.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parses_case_insensitively() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("Distance".parse::<SortKey>().unwrap(), SortKey::Distance);
        assert_eq!("CITY".parse::<SortKey>().unwrap(), SortKey::City);
    }

    #[test]
    fn test_sort_key_rejects_unknown() {
        assert!("nearest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_proximity_mode_needs_center_and_radius() {
        let mut spec = QuerySpec::new();
        assert!(!spec.proximity_mode());

        spec.center = Some(GeoPoint::new(0.0, 1.0));
        assert!(!spec.proximity_mode());

        spec.radius_km = Some(50.0);
        assert!(spec.proximity_mode());
    }
}
