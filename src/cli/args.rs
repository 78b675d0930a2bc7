//! CLI argument definitions using clap
//!
//! Commands:
//! - geodir seed
//! - geodir list [--all | --featured]
//! - geodir show <id>
//! - geodir add --name ... --category ... [--schedules "Domingo 09:00; ..."]
//! - geodir search [--text ...] [--near lat,lng --radius-km N] [--sort key]
//! - geodir approve <id> / feature <id> / delete <id>
//! - geodir facets

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::geo::GeoPoint;
use crate::query::SortKey;

/// geodir - A geolocated directory record store and query engine
#[derive(Parser, Debug)]
#[command(name = "geodir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding the persisted blob
    #[arg(long, global = true, default_value = "./geodir-data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the store, seeding the demonstration dataset on first run
    Seed,

    /// List records (approved only by default)
    List {
        /// Include unapproved records
        #[arg(long, conflicts_with = "featured")]
        all: bool,

        /// Only approved and featured records
        #[arg(long)]
        featured: bool,
    },

    /// Show one record in full
    Show {
        /// Record id
        id: String,
    },

    /// Create a record (starts unapproved)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        region: String,
        #[arg(long)]
        neighborhood: Option<String>,
        /// Latitude in decimal degrees
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in decimal degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
        #[arg(long, default_value = "")]
        responsible: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        whatsapp: String,
        /// Compact schedule text, e.g. "Domingo 09:00, 18:00; Quarta 19:30"
        #[arg(long)]
        schedules: Option<String>,
    },

    /// Query the directory
    Search {
        /// Free-text term over name, category, city, region, address
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Schedule day, e.g. "domingo"
        #[arg(long)]
        day: Option<String>,
        /// Proximity center as "lat,lng"
        #[arg(long, value_parser = parse_center, allow_hyphen_values = true)]
        near: Option<GeoPoint>,
        /// Proximity radius in kilometres
        #[arg(long, requires = "near")]
        radius_km: Option<f64>,
        /// Sort key: name, category, city, or distance
        #[arg(long, value_parser = parse_sort)]
        sort: Option<SortKey>,
        /// Include unapproved records
        #[arg(long)]
        include_unapproved: bool,
    },

    /// Open the moderation gate for a record
    Approve {
        /// Record id
        id: String,
    },

    /// Set or toggle the promotion flag
    Feature {
        /// Record id
        id: String,
        /// Explicit value; omitted toggles
        #[arg(long)]
        set: Option<bool>,
    },

    /// Remove a record
    Delete {
        /// Record id
        id: String,
    },

    /// Show distinct cities, regions, and categories of the approved set
    Facets,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Parse a sort key flag value.
fn parse_sort(raw: &str) -> Result<SortKey, String> {
    raw.parse()
}

/// Parse a "lat,lng" pair into a point.
fn parse_center(raw: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got '{}'", raw))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;
    Ok(GeoPoint::new(lat, lng))
}
