//! Dictionary-based maximal matching tokenizer for Thai.
//!
//! Thai is written without spaces between words, so segmentation needs a
//! word list. Text is first split on whitespace and then into runs of Thai
//! script and everything else:
//!
//! - Non-Thai runs are segmented on Unicode word boundaries (UAX #29).
//!   Punctuation segments are kept as tokens.
//! - Thai runs are segmented by dynamic programming over grapheme clusters,
//!   picking the split with the fewest out-of-dictionary clusters and then
//!   the fewest tokens. Words start and end on cluster boundaries, so a
//!   vowel or tone mark never leaves its consonant. Consecutive
//!   out-of-dictionary clusters collapse into one token.
//!
//! # Examples
//!
//! ```
//! use tabi_core::tokenizer::{DictionaryTokenizer, Tokenizer};
//!
//! let tokenizer = DictionaryTokenizer::new();
//! assert_eq!(tokenizer.tokenize("เดินทางยังไง"), vec!["เดินทาง", "ยังไง"]);
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

/// Built-in Thai word list. Covers every trigger of the default keyword
/// table plus the words that usually surround them in a question.
const DEFAULT_WORDS: &[&str] = &[
    // wake-up
    "ตื่น", "ตื่นนอน", "เช้า", "เวลาตื่น", "ตื่นกี่โมง",
    // schedule
    "วันนี้", "กำหนดการ", "แผน", "ตาราง", "โปรแกรม",
    // destination
    "ต่อไป", "ถัดไป", "ไปที่ไหน", "จุดหมาย", "ปลายทาง", "ไปไหน", "ไปต่อ",
    // travel
    "ยังไง", "วิธีไป", "รถไฟ", "บัส", "รถ", "เดิน", "เที่ยวบิน", "เครื่องบิน", "พาหนะ",
    "นั่งอะไร",
    // activity
    "ทำอะไร", "กิจกรรม", "เที่ยว", "ดู", "ไหว้", "ช้อปปิ้ง", "ซื้อ",
    // departure
    "กี่โมง", "เวลาออก", "ออกเดินทาง", "นัด", "เวลาเดินทาง",
    // common words
    "วัน", "นี้", "พรุ่งนี้", "เมื่อวาน", "วันที่", "ทำ", "อะไร", "บ้าง", "ไป", "ที่", "ไหน",
    "ที่ไหน", "ต่อ", "เดินทาง", "ออก", "เวลา", "นอน", "กี่", "โมง", "ครับ", "ค่ะ", "คะ", "จะ",
    "เรา", "ของ", "จาก", "ถึง", "ไหม", "มี", "อยู่", "กิน", "ข้าว", "ร้าน", "โรงแรม", "สถานี",
    "สวัสดี", "ขอบคุณ",
];

static DEFAULT_DICTIONARY: Lazy<HashSet<String>> =
    Lazy::new(|| DEFAULT_WORDS.iter().map(|w| w.to_string()).collect());

fn is_thai(c: char) -> bool {
    matches!(c, '\u{0E00}'..='\u{0E7F}')
}

/// Lexicographic segmentation cost: (out-of-dictionary clusters, tokens).
type Cost = (usize, usize);

/// A tokenizer that segments Thai text against a word dictionary.
#[derive(Clone, Debug)]
pub struct DictionaryTokenizer {
    words: HashSet<String>,
    /// Longest word, in grapheme clusters.
    max_word_len: usize,
}

impl DictionaryTokenizer {
    /// Create a tokenizer with the built-in word list.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_DICTIONARY.clone())
    }

    /// Create a tokenizer with the built-in word list plus `extra`.
    pub fn with_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = DEFAULT_DICTIONARY.clone();
        words.extend(extra.into_iter().map(Into::into));
        Self::from_words(words)
    }

    fn from_words(mut words: HashSet<String>) -> Self {
        words.retain(|w| !w.trim().is_empty());
        let max_word_len = words
            .iter()
            .map(|w| w.graphemes(true).count())
            .max()
            .unwrap_or(1);
        Self {
            words,
            max_word_len,
        }
    }

    /// Whether `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of dictionary words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Segment one run of Thai characters.
    fn segment_thai(&self, run: &str) -> Vec<String> {
        let clusters: Vec<&str> = run.graphemes(true).collect();
        let n = clusters.len();

        let mut best: Vec<Option<Cost>> = vec![None; n + 1];
        // back[k] = (start of the span ending at k, span is a dictionary word)
        let mut back: Vec<(usize, bool)> = vec![(0, false); n + 1];
        best[0] = Some((0, 0));

        for i in 0..n {
            let Some((unknown, tokens)) = best[i] else {
                continue;
            };

            let mut relax = |end: usize, cost: Cost, known: bool| {
                if best[end].map_or(true, |current| cost < current) {
                    best[end] = Some(cost);
                    back[end] = (i, known);
                }
            };

            relax(i + 1, (unknown + 1, tokens + 1), false);

            let mut piece = String::new();
            for (j, cluster) in clusters.iter().enumerate().skip(i).take(self.max_word_len) {
                piece.push_str(cluster);
                if self.words.contains(&piece) {
                    relax(j + 1, (unknown, tokens + 1), true);
                }
            }
        }

        let mut spans = Vec::new();
        let mut end = n;
        while end > 0 {
            let (start, known) = back[end];
            spans.push((start, end, known));
            end = start;
        }
        spans.reverse();

        let mut tokens: Vec<String> = Vec::with_capacity(spans.len());
        let mut previous_unknown = false;
        for (start, end, known) in spans {
            let text = clusters[start..end].concat();
            match tokens.last_mut() {
                Some(last) if !known && previous_unknown => last.push_str(&text),
                _ => tokens.push(text),
            }
            previous_unknown = !known;
        }
        tokens
    }
}

impl Default for DictionaryTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for DictionaryTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            for (thai, run) in script_runs(chunk) {
                if thai {
                    tokens.extend(self.segment_thai(run));
                } else {
                    tokens.extend(
                        run.split_word_bounds()
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(str::to_string),
                    );
                }
            }
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

/// Split a whitespace-free chunk into maximal runs of Thai and non-Thai text.
fn script_runs(chunk: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (offset, c) in chunk.char_indices() {
        let thai = is_thai(c);
        match current {
            Some(kind) if kind != thai => {
                runs.push((kind, &chunk[start..offset]));
                start = offset;
                current = Some(thai);
            }
            None => current = Some(thai),
            _ => {}
        }
    }

    if let Some(kind) = current {
        runs.push((kind, &chunk[start..]));
    }
    runs
}
