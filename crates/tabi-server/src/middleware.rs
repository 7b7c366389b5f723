//! Middleware for the webhook server.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{debug, info};

use crate::routes::SIGNATURE_HEADER;

/// Request logging middleware.
///
/// Health probes are logged at debug level; platforms poll them often.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let signed = request.headers().contains_key(SIGNATURE_HEADER);
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if path == "/health" {
        debug!(method = %method, path = %path, status, duration_ms, "Health probe");
    } else {
        info!(
            method = %method,
            path = %path,
            status,
            signed,
            duration_ms,
            "Request completed"
        );
    }

    response
}
