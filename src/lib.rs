//! geodir - A geolocated directory record store and query engine
//!
//! The store owns the authoritative collection of directory records and
//! notifies subscribers on every mutation; the query engine runs
//! multi-criterion filter pipelines and proximity ranking over
//! snapshots; persistence goes through a single JSON blob behind the
//! blob-store boundary.

pub mod cli;
pub mod geo;
pub mod model;
pub mod observability;
pub mod persist;
pub mod query;
pub mod store;
