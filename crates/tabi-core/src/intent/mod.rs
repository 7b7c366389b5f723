//! Intent detection: keyword table and classifier.

pub mod classifier;
pub mod keywords;

pub use classifier::{Classification, IntentClassifier};
pub use keywords::{KeywordEntry, KeywordTable};
