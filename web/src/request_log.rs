// Verbose request logging, only installed when `REQUEST_LOGGING` is enabled.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::trust;

pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    tracing::info!(
        %method,
        %uri,
        is_bot = trust::is_automated(req.headers()),
        "Incoming request"
    );
    if method == Method::POST {
        tracing::info!(%uri, headers = ?req.headers(), "POST request headers");
    }

    let response = next.run(req).await;

    tracing::info!(%method, %uri, status = response.status().as_u16(), "Request handled");
    response
}
