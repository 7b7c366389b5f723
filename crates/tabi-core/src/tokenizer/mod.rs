//! Tokenizers that turn raw message text into tokens.
//!
//! The classifier only relies on the [`Tokenizer`] contract: a deterministic,
//! finite sequence of non-empty, trimmed tokens.

pub mod dictionary;

pub use dictionary::DictionaryTokenizer;

/// Trait for tokenizers that split text into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text. Never returns empty or whitespace-only tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on whitespace only.
///
/// Useful for input that is already segmented.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
