//! CLI command implementations
//!
//! Each command opens the store over a file-backed blob store in the
//! data directory, performs one operation, and prints line-oriented
//! output. Absence of results prints "no matches", never an error.

use std::path::Path;

use crate::geo::GeoPoint;
use crate::model::{parse_schedule_text, Contact, Record, RecordDraft};
use crate::persist::{FileBlobStore, PersistenceBridge};
use crate::query::{FacetIndex, QueryEngine, QuerySpec};
use crate::store::RecordStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Dispatch a parsed command.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Seed => seed(&cli.data_dir),
        Command::List { all, featured } => list(&cli.data_dir, all, featured),
        Command::Show { id } => show(&cli.data_dir, &id),
        Command::Add {
            name,
            category,
            address,
            city,
            region,
            neighborhood,
            lat,
            lng,
            responsible,
            phone,
            email,
            whatsapp,
            schedules,
        } => add(
            &cli.data_dir,
            RecordDraft {
                name,
                category,
                address,
                city,
                region,
                neighborhood,
                coordinates: match (lat, lng) {
                    (Some(lat), Some(lng)) => GeoPoint::from_raw(lat, lng),
                    _ => None,
                },
                contact: Contact {
                    responsible,
                    phone,
                    email,
                    whatsapp,
                },
                schedules: schedules.as_deref().map(parse_schedule_text),
                approved: None,
                featured: None,
            },
        ),
        Command::Search {
            text,
            city,
            region,
            category,
            day,
            near,
            radius_km,
            sort,
            include_unapproved,
        } => search(
            &cli.data_dir,
            QuerySpec {
                text,
                city,
                region,
                category,
                day,
                only_approved: !include_unapproved,
                center: near,
                radius_km,
                sort,
            },
        ),
        Command::Approve { id } => approve(&cli.data_dir, &id),
        Command::Feature { id, set } => feature(&cli.data_dir, &id, set),
        Command::Delete { id } => delete(&cli.data_dir, &id),
        Command::Facets => facets(&cli.data_dir),
    }
}

fn open_store(data_dir: &Path) -> CliResult<RecordStore> {
    let blob = FileBlobStore::open(data_dir)
        .map_err(|e| CliError::boot_failed(format!("cannot open data dir: {}", e)))?;
    let bridge = PersistenceBridge::new(Box::new(blob));
    RecordStore::open(bridge).map_err(|e| CliError::boot_failed(e.to_string()))
}

fn seed(data_dir: &Path) -> CliResult<()> {
    let store = open_store(data_dir)?;
    println!("directory holds {} records", store.list().len());
    Ok(())
}

fn list(data_dir: &Path, all: bool, featured: bool) -> CliResult<()> {
    let store = open_store(data_dir)?;
    let records = if all {
        store.list()
    } else if featured {
        store.list_featured()
    } else {
        store.list_approved()
    };

    if records.is_empty() {
        println!("no matches");
        return Ok(());
    }
    for record in &records {
        print_record_line(record, None);
    }
    Ok(())
}

fn show(data_dir: &Path, id: &str) -> CliResult<()> {
    let store = open_store(data_dir)?;
    let Some(record) = store.get_by_id(id) else {
        println!("no record with id {}", id);
        return Ok(());
    };

    println!("{}", record.name);
    println!("  id:        {}", record.id);
    println!("  category:  {}", record.category);
    println!("  address:   {}", record.address);
    if let Some(neighborhood) = &record.neighborhood {
        println!("  bairro:    {}", neighborhood);
    }
    println!("  city:      {}/{}", record.city, record.region);
    match record.coordinates {
        Some(point) => println!("  location:  {:.4}, {:.4}", point.lat, point.lng),
        None => println!("  location:  unknown"),
    }
    if !record.contact.responsible.is_empty() {
        println!("  contact:   {} {}", record.contact.responsible, record.contact.phone);
    }
    for schedule in &record.schedules {
        println!("  {}: {}", schedule.day, schedule.times.join(", "));
    }
    println!(
        "  status:    {}{}",
        if record.approved { "approved" } else { "pending" },
        if record.featured { ", featured" } else { "" }
    );
    Ok(())
}

fn add(data_dir: &Path, draft: RecordDraft) -> CliResult<()> {
    let mut store = open_store(data_dir)?;
    let record = store.create(draft)?;
    println!("created {} ({}), pending approval", record.id, record.name);
    Ok(())
}

fn search(data_dir: &Path, spec: QuerySpec) -> CliResult<()> {
    let store = open_store(data_dir)?;
    let snapshot = store.list();
    let results = QueryEngine::run(&snapshot, &spec);

    if results.is_empty() {
        println!("no matches");
        return Ok(());
    }

    for record in &results {
        let distance = spec.center.and_then(|c| QueryEngine::distance_from(c, record));
        print_record_line(record, distance);
    }

    let summary = FacetIndex::summary(&results);
    println!(
        "{} found across {} categories, {} cities, {} regions",
        summary.total, summary.categories, summary.cities, summary.regions
    );
    Ok(())
}

fn approve(data_dir: &Path, id: &str) -> CliResult<()> {
    let mut store = open_store(data_dir)?;
    store.approve(id)?;
    match store.get_by_id(id) {
        Some(record) => println!("approved {} ({})", record.id, record.name),
        None => println!("no record with id {}", id),
    }
    Ok(())
}

fn feature(data_dir: &Path, id: &str, set: Option<bool>) -> CliResult<()> {
    let mut store = open_store(data_dir)?;
    store.set_featured(id, set)?;
    match store.get_by_id(id) {
        Some(record) => println!(
            "{} is {}featured",
            record.name,
            if record.featured { "" } else { "no longer " }
        ),
        None => println!("no record with id {}", id),
    }
    Ok(())
}

fn delete(data_dir: &Path, id: &str) -> CliResult<()> {
    let mut store = open_store(data_dir)?;
    let existed = store.get_by_id(id).is_some();
    store.delete(id)?;
    if existed {
        println!("deleted {}", id);
    } else {
        println!("no record with id {}", id);
    }
    Ok(())
}

fn facets(data_dir: &Path) -> CliResult<()> {
    let store = open_store(data_dir)?;
    let approved = store.list_approved();

    println!("cities:     {}", FacetIndex::cities(&approved).join(", "));
    println!("regions:    {}", FacetIndex::regions(&approved).join(", "));
    println!("categories: {}", FacetIndex::categories(&approved).join(", "));
    Ok(())
}

fn print_record_line(record: &Record, distance: Option<f64>) {
    let mut line = format!(
        "{}  {} | {} | {}/{}",
        record.id, record.name, record.category, record.city, record.region
    );
    if let Some(km) = distance {
        line.push_str(&format!(" | {:.1} km", km));
    }
    if !record.approved {
        line.push_str(" [pending]");
    }
    if record.featured {
        line.push_str(" [featured]");
    }
    println!("{}", line);
}
