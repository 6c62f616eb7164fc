//! CORS layer construction from configuration.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use mistica_core::config::server::CorsConfig;

/// Builds the CORS layer from the server configuration.
///
/// `["*"]` opens the API to any origin; otherwise only the listed
/// origins are allowed. Unparseable origins are skipped with a warning.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin
                    .parse()
                    .inspect_err(|_| warn!(%origin, "skipping unparseable CORS origin"))
                    .ok()
            })
            .collect();
        layer.allow_origin(origins)
    }
}
