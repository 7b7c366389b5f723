//! Rule-based intent classification.
//!
//! A message matches an intent when one of its tokens equals one of the
//! intent's triggers exactly. Substrings never match: if the tokenizer glues
//! a trigger onto a neighbouring word, the trigger is not seen.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::keywords::KeywordTable;
use crate::tokenizer::Tokenizer;
use crate::types::Intent;

/// Outcome of a classification with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    /// Trigger that decided the intent. `None` for [`Intent::Unknown`].
    pub matched: Option<String>,
}

/// Classifies message text against a [`KeywordTable`].
#[derive(Clone)]
pub struct IntentClassifier {
    tokenizer: Arc<dyn Tokenizer>,
    table: Arc<KeywordTable>,
}

impl IntentClassifier {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, table: Arc<KeywordTable>) -> Self {
        Self { tokenizer, table }
    }

    /// Classify raw text. Total: anything that matches nothing is `Unknown`.
    pub fn classify(&self, text: &str) -> Intent {
        self.explain(text).intent
    }

    /// Classify tokens that were produced elsewhere.
    pub fn classify_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Intent {
        let tokens: HashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        self.match_tokens(&tokens).intent
    }

    /// Classify raw text and report which trigger fired.
    pub fn explain(&self, text: &str) -> Classification {
        let tokens = self.tokenizer.tokenize(text);
        let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let classification = self.match_tokens(&token_set);

        debug!(
            tokenizer = self.tokenizer.name(),
            tokens = ?tokens,
            intent = %classification.intent,
            matched = ?classification.matched,
            "Classified message"
        );

        classification
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    fn match_tokens(&self, tokens: &HashSet<&str>) -> Classification {
        for (intent, triggers) in self.table.iter() {
            // Pick the smallest matching trigger so the evidence is stable
            // regardless of hash iteration order.
            let hit = tokens
                .iter()
                .filter(|token| triggers.contains(**token))
                .min();
            if let Some(trigger) = hit {
                return Classification {
                    intent,
                    matched: Some(trigger.to_string()),
                };
            }
        }

        Classification {
            intent: Intent::Unknown,
            matched: None,
        }
    }
}
