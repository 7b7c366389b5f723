//! LINE webhook endpoint.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{ApiError, ApiResult};
use crate::line::WebhookBody;
use crate::state::AppState;

/// Header carrying the base64 HMAC-SHA256 of the body.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: String,
}

/// Receive LINE webhook events and answer text messages.
/// POST /webhook
///
/// A failed reply is logged but still acknowledged, so LINE does not
/// redeliver an event whose reply token is already spent.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<WebhookResponse>> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(ApiError::missing_signature)?;

    if !state.verify(&body, signature) {
        warn!("Rejected webhook with invalid signature");
        return Err(ApiError::invalid_signature());
    }

    let payload: WebhookBody = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid webhook body: {}", e)))?;

    let assistant = state.assistant();
    let sender = state.sender();
    let deliveries = payload
        .events
        .iter()
        .filter_map(|event| event.as_text_message())
        .map(|message| {
            let answer = assistant.answer(message.text, message.timestamp);
            debug!(
                intent = ?answer.intent,
                date = %answer.date,
                "Answering text message"
            );
            async move {
                if let Err(e) = sender.send_reply(message.reply_token, &answer.text).await {
                    error!("Reply delivery failed: {}", e);
                }
            }
        });

    join_all(deliveries).await;

    Ok(Json(WebhookResponse {
        status: "ok".to_string(),
    }))
}
