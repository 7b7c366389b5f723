//! Error types for tabi operations.
//!
//! Every error here is a load-time failure. Request-time operations
//! (classification, date resolution, lookup, reply building) are total and
//! never return one.

use thiserror::Error;

/// Result type alias for tabi operations.
pub type TabiResult<T> = Result<T, TabiError>;

/// Main error type for all tabi operations.
#[derive(Error, Debug)]
pub enum TabiError {
    /// Itinerary data failed validation.
    #[error("Itinerary error: {message}")]
    Itinerary { message: String, code: ErrorCode },

    /// Keyword table failed validation.
    #[error("Keyword table error: {message}")]
    KeywordTable { message: String, code: ErrorCode },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Itinerary (ITN_xxx)
    ItnInvalidDate,
    ItnInvalidTime,
    ItnMalformed,

    // Keyword table (KWT_xxx)
    KwtFallbackListed,
    KwtDuplicateIntent,
    KwtEmptyTrigger,

    // Configuration
    Config,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ItnInvalidDate => "ITN_001",
            ErrorCode::ItnInvalidTime => "ITN_002",
            ErrorCode::ItnMalformed => "ITN_003",
            ErrorCode::KwtFallbackListed => "KWT_001",
            ErrorCode::KwtDuplicateIntent => "KWT_002",
            ErrorCode::KwtEmptyTrigger => "KWT_003",
            ErrorCode::Config => "CFG_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl TabiError {
    /// Create an itinerary error.
    pub fn itinerary(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Itinerary {
            message: message.into(),
            code,
        }
    }

    /// Create a keyword table error.
    pub fn keyword_table(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::KeywordTable {
            message: message.into(),
            code,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Itinerary { code, .. } => *code,
            Self::KeywordTable { code, .. } => *code,
            Self::Configuration(_) => ErrorCode::Config,
            Self::Serialization(_) => ErrorCode::ItnMalformed,
            Self::Io(_) => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Itinerary { .. } | Self::Serialization(_) => Some(
                "Every event needs string fields time (HH:MM), activity, travel_mode, origin and destination",
            ),
            Self::KeywordTable { .. } => {
                Some("List each intent once, never list Unknown, and avoid empty triggers")
            }
            Self::Io(_) => Some("Check that the configured file path exists and is readable"),
            Self::Configuration(_) => None,
        }
    }
}
