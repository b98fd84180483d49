use motdcard_api::{server_status, AppState};
use motdcard_config::Config;
use axum::{
    http::{HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use std::time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

pub fn build(config: &Config, app_state: AppState) -> Router {
    let timeout = Duration::from_secs(config.server.timeout_secs);
    let max_concurrent_requests = config.server.max_concurrent_requests;

    let mut router = Router::new()
        .route("/*address", get(server_status))
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout));

    // Optionally enable compression based on config
    if config.server.enable_compression {
        router = router.layer(CompressionLayer::new());
    }

    router
        .layer(build_cors_layer(&config.server.allowed_origins))
        .with_state(app_state)
}

/// The endpoint is read-only, so CORS only ever needs GET
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect();
    cors.allow_origin(origins)
}
