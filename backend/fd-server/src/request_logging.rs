use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log every request with its status and latency
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    log::debug!("-> {} {}", method, path);

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        log::error!("<- {} {} {} ({}ms)", method, path, status.as_u16(), elapsed_ms);
    } else {
        log::info!("<- {} {} {} ({}ms)", method, path, status.as_u16(), elapsed_ms);
    }

    response
}
