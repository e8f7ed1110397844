use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов:
/// метод, путь, статус, длительность и размер ответа.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status().as_u16();

    match measure(response).await {
        Ok((response, size)) => {
            tracing::info!(
                "{} {} -> {} ({} ms, {})",
                method,
                uri.path(),
                status,
                start.elapsed().as_millis(),
                format_size(size)
            );
            response
        }
        Err(response) => {
            tracing::warn!(
                "{} {} -> {} ({} ms, body read failed)",
                method,
                uri.path(),
                status,
                start.elapsed().as_millis()
            );
            response
        }
    }
}

/// Читает тело ответа, чтобы узнать реальный размер, и собирает ответ заново.
/// При ошибке чтения возвращается ответ с пустым телом.
async fn measure(response: Response) -> Result<(Response, usize), Response> {
    let (parts, body) = response.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = bytes.len();
            Ok((Response::from_parts(parts, Body::from(bytes)), size))
        }
        Err(_) => Err(Response::from_parts(parts, Body::empty())),
    }
}

fn format_size(size: usize) -> String {
    if size < 1024 {
        format!("{} B", size)
    } else {
        format!("{:.1} KB", size as f64 / 1024.0)
    }
}
