use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: HashMap<String, String>,
}

/// Health check endpoint
///
/// Reports local readiness only; the provider is never called from here.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut services = HashMap::new();

    let openai = if state.config.openai_api_key.is_empty() {
        "missing_api_key"
    } else {
        "configured"
    };
    services.insert("openai".to_string(), openai.to_string());

    let staging = match tokio::fs::metadata(state.stager.dir()).await {
        Ok(metadata) if metadata.is_dir() => "ready",
        _ => "not_created",
    };
    services.insert("staging".to_string(), staging.to_string());

    let generation = if state.generator.is_some() { "enabled" } else { "disabled" };
    services.insert("generation".to_string(), generation.to_string());

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    })
}
