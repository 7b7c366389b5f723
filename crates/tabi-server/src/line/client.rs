//! Reply delivery through the LINE Messaging API.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::payload::ReplyMessageRequest;

/// Error type for reply delivery.
#[derive(Debug, Clone, Error)]
pub enum ReplyError {
    /// 5xx or network failure - worth retrying.
    #[error("Transient error: {0}")]
    Transient(String),
    /// 4xx - retrying will not help (expired token, bad request).
    #[error("Permanent error: {0}")]
    Permanent(String),
}

/// Retry policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial delay before first retry (milliseconds)
    pub initial_delay_ms: u64,
    /// Maximum delay between retries (milliseconds)
    pub max_delay_ms: u64,
    /// Multiplier for exponential backoff
    pub multiplier: f32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        // Reply tokens expire quickly, so keep the whole budget short.
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 2_000,
            multiplier: 2.0_f32,
        }
    }
}

/// Sends a text reply for a webhook event.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn send_reply(&self, reply_token: &str, text: &str) -> Result<(), ReplyError>;
}

/// [`ReplySender`] backed by the LINE reply endpoint.
pub struct LineReplyClient {
    client: Client,
    endpoint: String,
    access_token: Secret<String>,
    retry_policy: RetryPolicy,
}

impl LineReplyClient {
    pub fn new(
        api_base: &str,
        access_token: Secret<String>,
        timeout: Duration,
        retry_policy: RetryPolicy,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/v2/bot/message/reply", api_base.trim_end_matches('/')),
            access_token,
            retry_policy,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_once(&self, body: &str) -> Result<(), ReplyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.access_token.expose_secret())
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| ReplyError::Transient(format!("Network error: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status.is_server_error() {
            Err(ReplyError::Transient(format!("Server error: {}", status)))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ReplyError::Permanent(format!(
                "Client error {}: {}",
                status, body
            )))
        }
    }
}

#[async_trait]
impl ReplySender for LineReplyClient {
    async fn send_reply(&self, reply_token: &str, text: &str) -> Result<(), ReplyError> {
        let body = serde_json::to_string(&ReplyMessageRequest::text(reply_token, text))
            .map_err(|e| ReplyError::Permanent(format!("Serialization error: {}", e)))?;

        let policy = &self.retry_policy;
        (|| self.send_once(&body))
            .retry(
                ExponentialBuilder::default()
                    .with_max_times(policy.max_retries as usize)
                    .with_min_delay(Duration::from_millis(policy.initial_delay_ms))
                    .with_max_delay(Duration::from_millis(policy.max_delay_ms))
                    .with_factor(policy.multiplier),
            )
            .when(|e| matches!(e, ReplyError::Transient(_)))
            .notify(|err, dur| {
                tracing::warn!(
                    "Reply delivery to {} failed, retrying in {:?}: {}",
                    self.endpoint,
                    dur,
                    err
                );
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    /// Local stand-in for the reply endpoint that answers with a fixed status.
    struct FakeLine {
        status: StatusCode,
        requests: Mutex<Vec<(Option<String>, Value)>>,
    }

    impl FakeLine {
        fn hits(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    async fn record_reply(
        State(line): State<Arc<FakeLine>>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let auth = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        line.requests.lock().unwrap().push((auth, body));
        line.status
    }

    async fn spawn_line(status: StatusCode) -> (String, Arc<FakeLine>) {
        let line = Arc::new(FakeLine {
            status,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/v2/bot/message/reply", post(record_reply))
            .with_state(line.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), line)
    }

    fn client(api_base: &str, max_retries: u32) -> LineReplyClient {
        LineReplyClient::new(
            api_base,
            Secret::new("channel-token".to_string()),
            Duration::from_secs(5),
            RetryPolicy {
                max_retries,
                initial_delay_ms: 1,
                max_delay_ms: 5,
                multiplier: 2.0,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_success_sends_bearer_and_reply_body() {
        let (base, line) = spawn_line(StatusCode::OK).await;

        client(&base, 2).send_reply("token-1", "สวัสดีค่ะ").await.unwrap();

        let requests = line.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer channel-token"));
        assert_eq!(
            body,
            &json!({
                "replyToken": "token-1",
                "messages": [{"type": "text", "text": "สวัสดีค่ะ"}]
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_is_retried_then_transient() {
        let (base, line) = spawn_line(StatusCode::INTERNAL_SERVER_ERROR).await;

        let err = client(&base, 2).send_reply("token-1", "hi").await.unwrap_err();

        assert!(matches!(err, ReplyError::Transient(_)));
        assert_eq!(line.hits(), 3);
    }

    #[tokio::test]
    async fn test_client_error_is_permanent_without_retry() {
        let (base, line) = spawn_line(StatusCode::BAD_REQUEST).await;

        let err = client(&base, 2).send_reply("expired", "hi").await.unwrap_err();

        assert!(matches!(err, ReplyError::Permanent(_)));
        assert_eq!(line.hits(), 1);
    }

    #[test]
    fn test_endpoint_joins_base() {
        let client = LineReplyClient::new(
            "https://api.line.me/",
            Secret::new("token".to_string()),
            Duration::from_secs(5),
            RetryPolicy::default(),
        )
        .unwrap();
        assert_eq!(client.endpoint(), "https://api.line.me/v2/bot/message/reply");
    }

    #[test]
    fn test_retry_policy_default() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.initial_delay_ms, 100);
        assert_eq!(policy.max_delay_ms, 2_000);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transient() {
        let client = LineReplyClient::new(
            "http://127.0.0.1:9",
            Secret::new("token".to_string()),
            Duration::from_millis(500),
            RetryPolicy {
                max_retries: 0,
                ..RetryPolicy::default()
            },
        )
        .unwrap();

        let err = client.send_reply("token-1", "hi").await.unwrap_err();
        assert!(matches!(err, ReplyError::Transient(_)));
    }
}
