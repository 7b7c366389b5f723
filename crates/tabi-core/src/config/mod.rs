//! Configuration system for tabi.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::Assistant;
use crate::error::{TabiError, TabiResult};
use crate::intent::{IntentClassifier, KeywordTable};
use crate::itinerary::Itinerary;
use crate::response::{ResponseBuilder, DEFAULT_TRIP_RANGE_NOTE};
use crate::time::{TimeResolver, DEFAULT_UTC_OFFSET_HOURS};
use crate::tokenizer::DictionaryTokenizer;

/// Main assistant configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabiConfig {
    /// Itinerary JSON file.
    pub itinerary_path: PathBuf,
    /// Keyword table JSON file. `None` uses the built-in Thai table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_path: Option<PathBuf>,
    /// Trip timezone as whole hours east of UTC.
    pub utc_offset_hours: i32,
    /// Note listing the trip dates, shown when a day has no events.
    pub trip_range_note: String,
}

impl Default for TabiConfig {
    fn default() -> Self {
        Self {
            itinerary_path: PathBuf::from("data/tokyo-matsumoto.json"),
            keywords_path: None,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            trip_range_note: DEFAULT_TRIP_RANGE_NOTE.to_string(),
        }
    }
}

impl TabiConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> TabiResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| TabiError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| TabiError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| TabiError::Configuration(e.to_string())),
            _ => Err(TabiError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads:
    /// - `TABI_ITINERARY_PATH` (default: `data/tokyo-matsumoto.json`)
    /// - `TABI_KEYWORDS_PATH` (default: built-in table)
    /// - `TABI_UTC_OFFSET_HOURS` (default: 9)
    /// - `TABI_TRIP_RANGE_NOTE` (default: the built-in Thai note)
    ///
    /// A `TABI_UTC_OFFSET_HOURS` that is not an integer is an error.
    pub fn from_env() -> TabiResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> TabiResult<Self> {
        let mut config = Self::default();

        if let Some(path) = var("TABI_ITINERARY_PATH") {
            config.itinerary_path = PathBuf::from(path);
        }

        if let Some(path) = var("TABI_KEYWORDS_PATH") {
            config.keywords_path = Some(PathBuf::from(path));
        }

        if let Some(hours) = var("TABI_UTC_OFFSET_HOURS") {
            config.utc_offset_hours = hours.trim().parse().map_err(|_| {
                TabiError::config(format!(
                    "TABI_UTC_OFFSET_HOURS '{}' is not a whole number of hours",
                    hours
                ))
            })?;
        }

        if let Some(note) = var("TABI_TRIP_RANGE_NOTE") {
            config.trip_range_note = note;
        }

        Ok(config)
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> TabiConfigBuilder {
        TabiConfigBuilder::default()
    }

    /// Load every table and assemble the assistant.
    ///
    /// This is the startup barrier: any invalid file fails here, before
    /// a single request is served.
    pub fn load_assistant(&self) -> TabiResult<Assistant> {
        let resolver = TimeResolver::with_offset_hours(self.utc_offset_hours).ok_or_else(|| {
            TabiError::config(format!(
                "utc_offset_hours must be between -23 and 23, got {}",
                self.utc_offset_hours
            ))
        })?;

        let table = match &self.keywords_path {
            Some(path) => {
                let table = KeywordTable::from_file(path)?;
                info!(path = %path.display(), intents = table.len(), "Loaded keyword table");
                table
            }
            None => KeywordTable::default(),
        };

        // Triggers must be segmentable as whole words, so they join the
        // dictionary.
        let tokenizer = DictionaryTokenizer::with_words(table.vocabulary().map(str::to_string));
        let classifier = IntentClassifier::new(Arc::new(tokenizer), Arc::new(table));

        let itinerary = Itinerary::from_file(&self.itinerary_path)?;
        let builder = ResponseBuilder::new().with_range_note(self.trip_range_note.clone());

        Ok(Assistant::new(
            classifier,
            resolver,
            Arc::new(itinerary),
            builder,
        ))
    }
}

/// Builder for TabiConfig.
#[derive(Default)]
pub struct TabiConfigBuilder {
    config: TabiConfig,
}

impl TabiConfigBuilder {
    /// Set itinerary file path.
    pub fn itinerary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.itinerary_path = path.into();
        self
    }

    /// Set keyword table file path.
    pub fn keywords_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.keywords_path = Some(path.into());
        self
    }

    /// Set trip timezone offset.
    pub fn utc_offset_hours(mut self, hours: i32) -> Self {
        self.config.utc_offset_hours = hours;
        self
    }

    /// Set trip date range note.
    pub fn trip_range_note(mut self, note: impl Into<String>) -> Self {
        self.config.trip_range_note = note.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TabiConfig {
        self.config
    }
}
