//! Intent categories a user question can fall into.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// What the user is asking about.
///
/// The wire names (`Ask_Wakeup_Time` and so on) are what keyword table files
/// and logs use. `Unknown` is the fallback and never appears in a keyword
/// table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Intent {
    /// When does the day start.
    #[strum(serialize = "Ask_Wakeup_Time")]
    #[serde(rename = "Ask_Wakeup_Time")]
    AskWakeupTime,
    /// Full schedule for today.
    #[strum(serialize = "Ask_Today_Schedule")]
    #[serde(rename = "Ask_Today_Schedule")]
    AskTodaySchedule,
    /// Where the day ends up.
    #[strum(serialize = "Ask_Next_Destination")]
    #[serde(rename = "Ask_Next_Destination")]
    AskNextDestination,
    /// How we travel today.
    #[strum(serialize = "Ask_Travel_Mode")]
    #[serde(rename = "Ask_Travel_Mode")]
    AskTravelMode,
    /// What we are doing today.
    #[strum(serialize = "Ask_Activity")]
    #[serde(rename = "Ask_Activity")]
    AskActivity,
    /// When we first head out.
    #[strum(serialize = "Ask_Departure_Time")]
    #[serde(rename = "Ask_Departure_Time")]
    AskDepartureTime,
    /// Nothing matched.
    #[strum(serialize = "Unknown")]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Intent {
    /// Whether this is the fallback intent.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Intent::Unknown)
    }

    /// All intents a keyword can map to, in declaration order.
    pub fn matchable() -> impl Iterator<Item = Intent> {
        Self::iter().filter(|intent| !intent.is_unknown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_wire_names() {
        assert_eq!(Intent::AskWakeupTime.to_string(), "Ask_Wakeup_Time");
        assert_eq!(
            Intent::from_str("Ask_Departure_Time").unwrap(),
            Intent::AskDepartureTime
        );
        let name: &'static str = Intent::Unknown.into();
        assert_eq!(name, "Unknown");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Intent::AskTravelMode).unwrap();
        assert_eq!(json, "\"Ask_Travel_Mode\"");

        let parsed: Intent = serde_json::from_str("\"Ask_Next_Destination\"").unwrap();
        assert_eq!(parsed, Intent::AskNextDestination);
    }

    #[test]
    fn test_matchable_excludes_unknown() {
        let intents: Vec<_> = Intent::matchable().collect();
        assert_eq!(intents.len(), 6);
        assert_eq!(intents[0], Intent::AskWakeupTime);
        assert!(!intents.contains(&Intent::Unknown));
    }
}
