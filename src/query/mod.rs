//! Query subsystem
//!
//! The engine consumes a collection snapshot and a query spec and
//! produces a deterministic ordered result set.
//!
//! # Pipeline (strict order)
//!
//! 1. Select the base set (approved-only or all)
//! 2. Apply the radius filter when in proximity mode
//! 3. Apply the free-text filter
//! 4. Apply the facet filters (city, region, category, day), AND-combined
//! 5. Sort by the requested key
//!
//! Every filter is conjunctive; no matches yields an empty result,
//! never an error.

mod engine;
mod facets;
mod spec;

pub use engine::QueryEngine;
pub use facets::{FacetIndex, FacetSummary};
pub use spec::{QuerySpec, SortKey};
