//! Directory record model
//!
//! The record is the unit being cataloged: a named organization with an
//! address, an optional location, contact details, and a weekly schedule.

mod record;
mod schedule;

pub use record::{Contact, Record, RecordDraft};
pub use schedule::{parse_schedule_text, Schedule};
