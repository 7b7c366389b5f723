//! Reply construction from (intent, date, events).

pub mod templates;

use std::collections::BTreeSet;

use crate::types::{Event, Intent};

pub use templates::{DEFAULT_TRIP_RANGE_NOTE, HELP_MESSAGE};

/// Builds the reply text for a classified question.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    range_note: String,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            range_note: DEFAULT_TRIP_RANGE_NOTE.to_string(),
        }
    }

    /// Replace the trip date range note shown when a day has no events.
    pub fn with_range_note(mut self, note: impl Into<String>) -> Self {
        self.range_note = note.into();
        self
    }

    pub fn range_note(&self) -> &str {
        &self.range_note
    }

    /// Build the reply. An empty day always yields the "no schedule"
    /// message, whatever the intent.
    pub fn build(&self, intent: Intent, date: &str, events: &[Event]) -> String {
        let (Some(first), Some(last)) = (events.first(), events.last()) else {
            return templates::no_schedule(date, &self.range_note);
        };

        match intent {
            Intent::AskWakeupTime => templates::wakeup(date, first),
            Intent::AskTodaySchedule => {
                let mut lines = vec![templates::schedule_header(date)];
                lines.extend(events.iter().map(templates::schedule_line));
                lines.join("\n")
            }
            Intent::AskNextDestination => templates::next_destination(last),
            Intent::AskTravelMode => {
                let modes: BTreeSet<&str> = events
                    .iter()
                    .filter(|e| e.has_travel())
                    .map(|e| e.travel_mode.as_str())
                    .collect();
                let modes: Vec<&str> = modes.into_iter().collect();
                templates::travel_modes(&modes)
            }
            Intent::AskActivity => {
                let mut lines = vec![templates::ACTIVITY_HEADER.to_string()];
                lines.extend(events.iter().map(templates::activity_line));
                lines.join("\n")
            }
            Intent::AskDepartureTime => templates::departure(first),
            Intent::Unknown => HELP_MESSAGE.to_string(),
        }
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NO_TRAVEL;
    use strum::IntoEnumIterator;

    const DATE: &str = "2026-05-30";

    fn day() -> Vec<Event> {
        vec![
            Event::new("07:00", "Breakfast", NO_TRAVEL, "Hotel", "Hotel"),
            Event::new("09:00", "Shinjuku to Matsumoto", "train", "Shinjuku", "Matsumoto"),
            Event::new("13:00", "Castle tour", NO_TRAVEL, "Matsumoto", "Matsumoto"),
            Event::new("16:00", "Kamikochi", "bus", "Matsumoto", "Kamikochi"),
            Event::new("19:00", "Back to ryokan", "train", "Kamikochi", "Asama Onsen"),
        ]
    }

    #[test]
    fn test_empty_day_short_circuits_every_intent() {
        let builder = ResponseBuilder::new();
        for intent in Intent::iter() {
            let reply = builder.build(intent, "2026-07-01", &[]);
            assert!(reply.contains("2026-07-01"), "intent: {intent}");
            assert!(reply.contains(DEFAULT_TRIP_RANGE_NOTE));
            assert!(reply.starts_with("ไม่พบกำหนดการ"));
        }
    }

    #[test]
    fn test_custom_range_note() {
        let builder = ResponseBuilder::new().with_range_note("29 May - 8 June");
        let reply = builder.build(Intent::AskActivity, DATE, &[]);
        assert!(reply.ends_with("29 May - 8 June"));
        assert_eq!(builder.range_note(), "29 May - 8 June");
    }

    #[test]
    fn test_wakeup_uses_first_event() {
        let reply = ResponseBuilder::new().build(Intent::AskWakeupTime, DATE, &day());
        assert!(reply.contains("07:00"));
        assert!(reply.contains("Breakfast"));
        assert!(reply.contains(DATE));
    }

    #[test]
    fn test_today_schedule_lists_every_event() {
        let reply = ResponseBuilder::new().build(Intent::AskTodaySchedule, DATE, &day());
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "📅 กำหนดการวันที่ 2026-05-30:");
        assert_eq!(lines[1], "  07:00 น. — Breakfast");
        assert_eq!(lines[2], "  09:00 น. — Shinjuku to Matsumoto (train)");
        assert!(!reply.contains("(none)"));
    }

    #[test]
    fn test_next_destination_uses_last_event() {
        let reply = ResponseBuilder::new().build(Intent::AskNextDestination, DATE, &day());
        assert!(reply.contains("Asama Onsen"));
        assert!(reply.contains("Back to ryokan"));
        assert!(!reply.contains("Kamikochi)"));
    }

    #[test]
    fn test_travel_modes_distinct_sorted_without_sentinel() {
        let events: Vec<Event> = ["train", "none", "bus", "train"]
            .iter()
            .map(|mode| Event::new("10:00", "x", *mode, "a", "b"))
            .collect();
        let reply = ResponseBuilder::new().build(Intent::AskTravelMode, DATE, &events);
        assert_eq!(reply, "วันนี้เดินทางด้วย: bus, train ค่ะ");
    }

    #[test]
    fn test_travel_modes_all_sentinel_gives_empty_list() {
        let events = vec![Event::new("10:00", "Rest", NO_TRAVEL, "Hotel", "Hotel")];
        let reply = ResponseBuilder::new().build(Intent::AskTravelMode, DATE, &events);
        assert_eq!(reply, "วันนี้เดินทางด้วย:  ค่ะ");
    }

    #[test]
    fn test_activity_omits_travel_and_destination() {
        let reply = ResponseBuilder::new().build(Intent::AskActivity, DATE, &day());
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines[0], "กิจกรรมวันนี้:");
        assert_eq!(lines[2], "• 09:00 น. Shinjuku to Matsumoto");
        assert_eq!(lines.len(), 6);
        assert!(!reply.contains("train"));
        assert!(!reply.contains("Asama Onsen"));
    }

    #[test]
    fn test_departure_uses_first_event() {
        let events = day();
        let reply = ResponseBuilder::new().build(Intent::AskDepartureTime, DATE, &events[1..]);
        assert!(reply.contains("09:00"));
        assert!(reply.contains("จาก Shinjuku → Matsumoto"));
    }

    #[test]
    fn test_unknown_ignores_events() {
        let builder = ResponseBuilder::new();
        let full = builder.build(Intent::Unknown, DATE, &day());
        let single = builder.build(
            Intent::Unknown,
            "2026-06-08",
            &[Event::new("10:00", "Fly home", "plane", "HND", "BKK")],
        );
        assert_eq!(full, HELP_MESSAGE);
        assert_eq!(single, HELP_MESSAGE);
    }
}
