use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_size;

/// Logs every request on one console line:
/// local time | duration | response size | status | method path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Static files carry Content-Length; only generated bodies are buffered.
    let declared = parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    let (size, body) = match declared {
        Some(size) => (Some(size), body),
        None => match to_bytes(body, usize::MAX).await {
            Ok(bytes) => (Some(bytes.len()), Body::from(bytes)),
            Err(e) => {
                tracing::warn!("Failed to read response body for {} {}: {}", method, path, e);
                (None, Body::default())
            }
        },
    };

    let status = parts.status.as_u16();
    // Cyan for 2xx, yellow for everything else
    let color_code = if parts.status.is_success() { "36" } else { "33" };
    let size_label = size.map(format_size).unwrap_or_else(|| "error".to_string());

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>14} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size_label,
        status,
        method,
        path
    );

    if status >= 500 {
        tracing::error!("{} {} -> {}", method, path, status);
    }

    Response::from_parts(parts, body)
}
