use anyhow::Context;
use axum::http::HeaderValue;
use monitor::config::AppConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Builds the CORS layer from `CORS_ORIGINS`.
///
/// `*` mirrors any requesting origin; otherwise only the listed origins are
/// allowed. Credentials are allowed in both cases.
pub fn cors_layer(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    if config.allows_any_origin() {
        return Ok(CorsLayer::very_permissive());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
