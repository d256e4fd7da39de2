//! CORS layer built from configuration.

use axum::http::{HeaderName, HeaderValue};
use tower_http::cors::{Any, CorsLayer};

use posthub_core::config::server::ServerConfig;

use super::auth::REFRESH_TOKEN_HEADER;

/// Builds the CORS layer. The rotation header is exposed so browser
/// clients can read it.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(REFRESH_TOKEN_HEADER)]);

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
