//! Read-only itinerary store keyed by local calendar date.
//!
//! Events are kept in the order they were authored. Nothing here sorts
//! them; the first and last entries of a day are whatever the file says.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::error::{ErrorCode, TabiError, TabiResult};
use crate::time::DATE_FORMAT;
use crate::types::Event;

/// Immutable mapping from `YYYY-MM-DD` to that day's events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    days: BTreeMap<String, Vec<Event>>,
}

impl Itinerary {
    /// Build an itinerary, validating date keys and event times.
    pub fn new(days: BTreeMap<String, Vec<Event>>) -> TabiResult<Self> {
        for (date, events) in &days {
            NaiveDate::parse_from_str(date, DATE_FORMAT)
                .ok()
                .filter(|parsed| parsed.format(DATE_FORMAT).to_string() == *date)
                .ok_or_else(|| {
                    TabiError::itinerary(
                        ErrorCode::ItnInvalidDate,
                        format!("'{}' is not a YYYY-MM-DD date", date),
                    )
                })?;

            let mut previous: Option<NaiveTime> = None;
            for (index, event) in events.iter().enumerate() {
                let time = parse_clock(&event.time).ok_or_else(|| {
                    TabiError::itinerary(
                        ErrorCode::ItnInvalidTime,
                        format!(
                            "{} event #{} has time '{}', expected HH:MM",
                            date, index, event.time
                        ),
                    )
                })?;

                if previous.is_some_and(|p| time < p) {
                    warn!(
                        date = %date,
                        index,
                        time = %event.time,
                        "Itinerary events are not in ascending time order"
                    );
                }
                previous = Some(time);
            }
        }

        Ok(Self { days })
    }

    /// Parse an itinerary from its JSON form.
    pub fn from_json_str(json: &str) -> TabiResult<Self> {
        let days: BTreeMap<String, Vec<Event>> = serde_json::from_str(json)?;
        Self::new(days)
    }

    /// Load an itinerary from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> TabiResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let itinerary = Self::from_json_str(&content)?;

        info!(
            path = %path.display(),
            days = itinerary.len(),
            events = itinerary.event_count(),
            "Loaded itinerary"
        );

        Ok(itinerary)
    }

    /// Events for `date` in authored order. Empty when nothing is planned.
    pub fn events_for(&self, date: &str) -> &[Event] {
        self.days.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All dates with an entry, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// First and last date with an entry.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        let first = self.days.keys().next()?;
        let last = self.days.keys().next_back()?;
        Some((first.as_str(), last.as_str()))
    }

    /// Number of days with an entry.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of events across all days.
    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Strict `HH:MM`: two digits each, 00-23 and 00-59.
fn parse_clock(value: &str) -> Option<NaiveTime> {
    if value.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}
