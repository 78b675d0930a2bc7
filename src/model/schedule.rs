//! Recurring weekly schedule entries
//!
//! A schedule names a day (free text, matched case-insensitively by
//! substring when filtering) and an ordered list of time-of-day strings.

use serde::{Deserialize, Serialize};

/// One recurring entry: a day and its times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Day label, e.g. "Domingo". Free text, not a closed enum.
    pub day: String,
    /// Time-of-day strings in display order, e.g. ["09:00", "18:00"].
    pub times: Vec<String>,
}

impl Schedule {
    /// Create a schedule entry.
    pub fn new(day: impl Into<String>, times: Vec<String>) -> Self {
        Self {
            day: day.into(),
            times,
        }
    }

    /// Whether this entry's day contains `filter`, case-insensitively.
    pub fn day_matches(&self, filter: &str) -> bool {
        self.day.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Parse the compact schedule text form into entries.
///
/// The format is `"<day> <time>, <time>; <day> <time>"`, for example
/// `"Domingo 09:00, 18:00; Quarta 19:30"`. Entries are split on `;`,
/// the day is everything up to the first whitespace, and times are
/// comma-separated. Blank fragments are dropped; a day with no times
/// yields an entry with an empty time list.
pub fn parse_schedule_text(raw: &str) -> Vec<Schedule> {
    raw.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (day, rest) = match part.split_once(char::is_whitespace) {
                Some((day, rest)) => (day, rest),
                None => (part, ""),
            };
            let times = rest
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            Schedule::new(day, times)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_entries() {
        let schedules = parse_schedule_text("Domingo 09:00, 18:00; Quarta 19:30");

        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].day, "Domingo");
        assert_eq!(schedules[0].times, vec!["09:00", "18:00"]);
        assert_eq!(schedules[1].day, "Quarta");
        assert_eq!(schedules[1].times, vec!["19:30"]);
    }

    #[test]
    fn test_parse_day_without_times() {
        let schedules = parse_schedule_text("Sábado");

        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].day, "Sábado");
        assert!(schedules[0].times.is_empty());
    }

    #[test]
    fn test_parse_drops_blank_fragments() {
        let schedules = parse_schedule_text("; Domingo 10:00; ;");

        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].day, "Domingo");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_schedule_text("").is_empty());
        assert!(parse_schedule_text("   ").is_empty());
    }

    #[test]
    fn test_day_matches_is_case_insensitive_substring() {
        let schedule = Schedule::new("Domingo", vec!["09:00".into()]);

        assert!(schedule.day_matches("domingo"));
        assert!(schedule.day_matches("DOM"));
        assert!(!schedule.day_matches("quarta"));
    }
}
