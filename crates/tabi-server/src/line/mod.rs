//! LINE Messaging API plumbing: signatures, payloads and reply delivery.

pub mod client;
pub mod payload;
pub mod signature;

pub use client::{LineReplyClient, ReplyError, ReplySender, RetryPolicy};
pub use payload::{ReplyMessageRequest, TextMessageEvent, WebhookBody, WebhookEvent};
pub use signature::{sign_body, verify_signature};
