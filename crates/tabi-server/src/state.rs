//! Server state management.

use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use tabi_core::Assistant;

use crate::line::{verify_signature, ReplySender};

/// Shared application state.
///
/// Everything inside is immutable after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    assistant: Arc<Assistant>,
    sender: Arc<dyn ReplySender>,
    channel_secret: Arc<Secret<String>>,
}

impl AppState {
    pub fn new(
        assistant: Assistant,
        sender: Arc<dyn ReplySender>,
        channel_secret: Secret<String>,
    ) -> Self {
        Self {
            assistant: Arc::new(assistant),
            sender,
            channel_secret: Arc::new(channel_secret),
        }
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn sender(&self) -> &dyn ReplySender {
        self.sender.as_ref()
    }

    /// Verify an `X-Line-Signature` header against the raw body.
    pub fn verify(&self, body: &[u8], signature: &str) -> bool {
        verify_signature(self.channel_secret.expose_secret(), body, signature)
    }
}
