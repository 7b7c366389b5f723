//! tabi-core - Core library for tabi.
//!
//! This crate answers Thai-language questions about a fixed trip
//! itinerary: it tokenizes the message, classifies it against a keyword
//! table, resolves the message timestamp to the trip's local date and fills
//! a reply template from that day's events.
//!
//! # Example
//!
//! ```ignore
//! use tabi_core::TabiConfig;
//!
//! let assistant = TabiConfig::from_env()?.load_assistant()?;
//!
//! // 2026-05-30 09:30 in Japan
//! let reply = assistant.reply("วันนี้ตื่นกี่โมง", 1_780_101_000_000);
//! ```

pub mod assistant;
pub mod config;
pub mod error;
pub mod intent;
pub mod itinerary;
pub mod response;
pub mod time;
pub mod tokenizer;
pub mod types;

// Re-export commonly used types
pub use assistant::{Answer, Assistant, ReplyOverride};
pub use config::TabiConfig;
pub use error::{ErrorCode, TabiError, TabiResult};
pub use intent::{Classification, IntentClassifier, KeywordEntry, KeywordTable};
pub use itinerary::Itinerary;
pub use response::ResponseBuilder;
pub use time::{resolve_date, TimeResolver};
pub use tokenizer::{DictionaryTokenizer, Tokenizer, WhitespaceTokenizer};
pub use types::{Event, Intent, NO_TRAVEL};
