//! A single itinerary entry.

use serde::{Deserialize, Serialize};

/// Sentinel `travel_mode` meaning the entry involves no travel.
pub const NO_TRAVEL: &str = "none";

/// One scheduled entry within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    /// Local clock time, `HH:MM`.
    pub time: String,
    /// What happens.
    pub activity: String,
    /// How we get there, or [`NO_TRAVEL`].
    pub travel_mode: String,
    /// Where the entry starts.
    pub origin: String,
    /// Where the entry ends.
    pub destination: String,
}

impl Event {
    /// Create a new event.
    pub fn new(
        time: impl Into<String>,
        activity: impl Into<String>,
        travel_mode: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            activity: activity.into(),
            travel_mode: travel_mode.into(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Whether this entry moves us anywhere.
    pub fn has_travel(&self) -> bool {
        self.travel_mode != NO_TRAVEL
    }
}
