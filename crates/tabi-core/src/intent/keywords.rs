//! Keyword table mapping intents to their trigger tokens.
//!
//! Entry order is classification priority: when a message hits triggers of
//! two intents, the one listed first wins.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, TabiError, TabiResult};
use crate::types::Intent;

/// One row of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub intent: Intent,
    pub triggers: Vec<String>,
}

impl KeywordEntry {
    pub fn new<I, S>(intent: Intent, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            intent,
            triggers: triggers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered, immutable intent to trigger-set table.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(Intent, HashSet<String>)>,
}

impl KeywordTable {
    /// Build a table from entries in priority order.
    pub fn new(entries: Vec<KeywordEntry>) -> TabiResult<Self> {
        let mut seen = HashSet::new();
        let mut table = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.intent.is_unknown() {
                return Err(TabiError::keyword_table(
                    ErrorCode::KwtFallbackListed,
                    "Unknown is the fallback intent and cannot have triggers",
                ));
            }
            if !seen.insert(entry.intent) {
                return Err(TabiError::keyword_table(
                    ErrorCode::KwtDuplicateIntent,
                    format!("intent {} is listed more than once", entry.intent),
                ));
            }
            if entry.triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(TabiError::keyword_table(
                    ErrorCode::KwtEmptyTrigger,
                    format!("intent {} has an empty trigger", entry.intent),
                ));
            }
            table.push((entry.intent, entry.triggers.into_iter().collect()));
        }

        Ok(Self { entries: table })
    }

    /// Load a table from a JSON array of `{"intent", "triggers"}` objects.
    pub fn from_json_str(json: &str) -> TabiResult<Self> {
        let entries: Vec<KeywordEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> TabiResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Iterate entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Intent, &HashSet<String>)> {
        self.entries.iter().map(|(intent, triggers)| (*intent, triggers))
    }

    /// Triggers registered for `intent`, if it is in the table.
    pub fn triggers(&self, intent: Intent) -> Option<&HashSet<String>> {
        self.entries
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, triggers)| triggers)
    }

    /// Every trigger across all intents.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, triggers)| triggers.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordTable {
    /// The built-in Thai table.
    fn default() -> Self {
        let entries = vec![
            KeywordEntry::new(
                Intent::AskWakeupTime,
                ["ตื่น", "ตื่นนอน", "เช้า", "เวลาตื่น", "ตื่นกี่โมง"],
            ),
            KeywordEntry::new(
                Intent::AskTodaySchedule,
                ["วันนี้", "กำหนดการ", "แผน", "ตาราง", "โปรแกรม", "plan", "schedule"],
            ),
            KeywordEntry::new(
                Intent::AskNextDestination,
                ["ต่อไป", "ถัดไป", "ไปที่ไหน", "จุดหมาย", "ปลายทาง", "ไปไหน", "ไปต่อ"],
            ),
            KeywordEntry::new(
                Intent::AskTravelMode,
                [
                    "ยังไง", "วิธีไป", "รถไฟ", "บัส", "รถ", "เดิน", "เที่ยวบิน", "เครื่องบิน",
                    "พาหนะ", "นั่งอะไร",
                ],
            ),
            KeywordEntry::new(
                Intent::AskActivity,
                ["ทำอะไร", "กิจกรรม", "เที่ยว", "ดู", "ไหว้", "ช้อปปิ้ง", "ซื้อ"],
            ),
            KeywordEntry::new(
                Intent::AskDepartureTime,
                ["กี่โมง", "เวลาออก", "ออกเดินทาง", "นัด", "เวลาเดินทาง"],
            ),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.intent, e.triggers.into_iter().collect()))
                .collect(),
        }
    }
}
