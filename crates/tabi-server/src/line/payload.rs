//! LINE webhook and reply API payloads.
//!
//! Only the fields the bot reads are modelled; everything else in the
//! webhook body is ignored.

use serde::{Deserialize, Serialize};

/// Webhook request body.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookBody {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One webhook event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub kind: String,
    /// UTC milliseconds.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<EventMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// A text message the bot should answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessageEvent<'a> {
    pub reply_token: &'a str,
    pub text: &'a str,
    pub timestamp: i64,
}

impl WebhookEvent {
    /// The event as a replyable text message, if it is one.
    pub fn as_text_message(&self) -> Option<TextMessageEvent<'_>> {
        if self.kind != "message" {
            return None;
        }
        let message = self.message.as_ref().filter(|m| m.kind == "text")?;
        Some(TextMessageEvent {
            reply_token: self.reply_token.as_deref()?,
            text: message.text.as_deref()?,
            timestamp: self.timestamp,
        })
    }
}

/// Reply API request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessageRequest<'a> {
    pub reply_token: &'a str,
    pub messages: Vec<TextMessage<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextMessage<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'a str,
}

impl<'a> ReplyMessageRequest<'a> {
    /// A reply carrying one text message.
    pub fn text(reply_token: &'a str, text: &'a str) -> Self {
        Self {
            reply_token,
            messages: vec![TextMessage { kind: "text", text }],
        }
    }
}
