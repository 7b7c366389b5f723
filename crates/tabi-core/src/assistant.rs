//! The question-answering pipeline.
//!
//! text -> tokens -> intent, timestamp -> date -> events, then
//! (intent, date, events) -> reply.

use std::sync::Arc;

use tracing::debug;

use crate::intent::IntentClassifier;
use crate::itinerary::Itinerary;
use crate::response::ResponseBuilder;
use crate::time::TimeResolver;
use crate::types::Intent;

/// Optional upstream stage that can answer before classification runs.
///
/// When an override returns `Some`, that reply is used as is and the
/// classifier is skipped. Returning `None` falls through to the rule-based
/// path.
pub trait ReplyOverride: Send + Sync {
    fn try_reply(&self, text: &str, timestamp_ms: i64) -> Option<String>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

/// A reply together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub date: String,
    /// `None` when an override produced the reply.
    pub intent: Option<Intent>,
}

/// Stateless assistant over one itinerary.
#[derive(Clone)]
pub struct Assistant {
    classifier: IntentClassifier,
    resolver: TimeResolver,
    itinerary: Arc<Itinerary>,
    builder: ResponseBuilder,
    override_hook: Option<Arc<dyn ReplyOverride>>,
}

impl Assistant {
    pub fn new(
        classifier: IntentClassifier,
        resolver: TimeResolver,
        itinerary: Arc<Itinerary>,
        builder: ResponseBuilder,
    ) -> Self {
        Self {
            classifier,
            resolver,
            itinerary,
            builder,
            override_hook: None,
        }
    }

    /// Install an upstream override.
    pub fn with_override(mut self, hook: Arc<dyn ReplyOverride>) -> Self {
        self.override_hook = Some(hook);
        self
    }

    /// Reply text for a message received at `timestamp_ms` (UTC).
    pub fn reply(&self, text: &str, timestamp_ms: i64) -> String {
        self.answer(text, timestamp_ms).text
    }

    /// Like [`Assistant::reply`], keeping the intent and resolved date.
    pub fn answer(&self, text: &str, timestamp_ms: i64) -> Answer {
        let date = self.resolver.resolve_date(timestamp_ms);

        if let Some(hook) = &self.override_hook {
            if let Some(text) = hook.try_reply(text, timestamp_ms) {
                debug!(hook = hook.name(), date = %date, "Reply produced by override");
                return Answer {
                    text,
                    date,
                    intent: None,
                };
            }
        }

        let intent = self.classifier.classify(text);
        let events = self.itinerary.events_for(&date);
        debug!(intent = %intent, date = %date, events = events.len(), "Building reply");

        Answer {
            text: self.builder.build(intent, &date, events),
            date,
            intent: Some(intent),
        }
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn resolver(&self) -> &TimeResolver {
        &self.resolver
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn builder(&self) -> &ResponseBuilder {
        &self.builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::KeywordTable;
    use crate::response::HELP_MESSAGE;
    use crate::tokenizer::DictionaryTokenizer;

    // 2026-05-30T00:30:00Z, 09:30 in Japan.
    const MAY_30_MORNING: i64 = 1_780_101_000_000;
    // 2026-05-29T16:00:00Z, already the 30th in Japan.
    const MAY_29_LATE_UTC: i64 = 1_780_070_400_000;

    fn assistant() -> Assistant {
        let itinerary = Itinerary::from_json_str(
            r#"{"2026-05-30": [
                {"time": "07:00", "activity": "Breakfast", "travel_mode": "none",
                 "origin": "Hotel", "destination": "Hotel"},
                {"time": "10:00", "activity": "Castle", "travel_mode": "train",
                 "origin": "Hotel", "destination": "Matsumoto"}
            ]}"#,
        )
        .unwrap();
        Assistant::new(
            IntentClassifier::new(
                Arc::new(DictionaryTokenizer::new()),
                Arc::new(KeywordTable::default()),
            ),
            TimeResolver::default(),
            Arc::new(itinerary),
            ResponseBuilder::new(),
        )
    }

    struct Canned;

    impl ReplyOverride for Canned {
        fn try_reply(&self, text: &str, _timestamp_ms: i64) -> Option<String> {
            text.contains("ฮาคุบะ").then(|| "route".to_string())
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    #[test]
    fn test_reply_end_to_end() {
        let answer = assistant().answer("ตื่นกี่โมง", MAY_30_MORNING);
        assert_eq!(answer.intent, Some(Intent::AskWakeupTime));
        assert_eq!(answer.date, "2026-05-30");
        assert!(answer.text.contains("07:00"));
        assert!(answer.text.contains("Breakfast"));
    }

    #[test]
    fn test_date_uses_japan_offset() {
        let answer = assistant().answer("เดินทางยังไง", MAY_29_LATE_UTC);
        assert_eq!(answer.date, "2026-05-30");
        assert_eq!(answer.text, "วันนี้เดินทางด้วย: train ค่ะ");
    }

    #[test]
    fn test_day_without_events() {
        let reply = assistant().reply("วันนี้ทำอะไรบ้าง", 0);
        assert!(reply.contains("1970-01-01"));
        assert!(reply.starts_with("ไม่พบกำหนดการ"));
    }

    #[test]
    fn test_unknown_question() {
        assert_eq!(assistant().reply("สวัสดี", MAY_30_MORNING), HELP_MESSAGE);
    }

    #[test]
    fn test_override_short_circuits() {
        let assistant = assistant().with_override(Arc::new(Canned));

        let answer = assistant.answer("จากมัตสึโมโตะไปฮาคุบะยังไง", MAY_30_MORNING);
        assert_eq!(answer.text, "route");
        assert!(answer.intent.is_none());

        let answer = assistant.answer("ตื่นกี่โมง", MAY_30_MORNING);
        assert_eq!(answer.intent, Some(Intent::AskWakeupTime));
    }
}
