use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{info, warn};
use std::time::Instant;

/// Logs one `http_request` record per request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let http_status = response.status();
    let duration_ms = started_at.elapsed().as_millis();
    if http_status.is_server_error() {
        warn!(
            "event=http_request module=http status=error method={method} path={path} http_status={} duration_ms={duration_ms}",
            http_status.as_u16()
        );
    } else {
        info!(
            "event=http_request module=http status=ok method={method} path={path} http_status={} duration_ms={duration_ms}",
            http_status.as_u16()
        );
    }

    response
}
