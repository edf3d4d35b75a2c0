pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod upload;
pub mod views;

use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::stream,
    middleware::logging,
    routes::{health, openapi, pages, summaries, topic},
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    let server = &state.config.server;

    let bounded = Router::new()
        .route("/", get(pages::index))
        .route("/topic", post(topic::submit_topic))
        .route("/health", get(health::health_check))
        .route("/api/openapi.json", get(openapi::openapi_json))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)));

    // Summaries are bounded by the workflow's own ingestion and run deadlines
    let summaries = Router::new()
        .route("/summaries", post(summaries::create_summary))
        .route("/api/summaries", post(stream::stream_summary));

    bounded
        .merge(summaries)
        .layer(axum_middleware::from_fn(logging::log_request))
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let cors = CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let parsed_origins: Vec<axum::http::HeaderValue> = config
                .cors
                .origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect();

            cors.allow_origin(parsed_origins)
        }
    } else {
        CorsLayer::permissive()
    }
}
