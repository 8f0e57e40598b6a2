use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, FromRequestParts, Request},
    http::Method,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use tracing::info;

/// Logs method, path, client IP, origin and user-agent for each request,
/// together with the response status and latency. CORS preflight `OPTIONS`
/// requests pass through unlogged.
///
/// ```ignore
/// use axum::middleware::from_fn;
/// use api::middleware::log_request;
///
/// let app = routes(app_state).layer(from_fn(log_request));
/// ```
///
/// The client IP is only known when the server is started with
/// `into_make_service_with_connect_info::<SocketAddr>()`; otherwise it is
/// logged as `unknown`.
pub async fn log_request(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    let method = parts.method.clone();
    let path = parts.uri.path().to_string();

    let started = Instant::now();
    let response = next.run(Request::from_parts(parts, body)).await;

    info!(
        method = ?method,
        path = %path,
        ip = %ip,
        origin = origin.unwrap_or_else(|| "unknown".into()),
        user_agent = user_agent.unwrap_or_else(|| "unknown".into()),
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );

    response
}
