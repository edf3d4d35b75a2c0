use axum::Json;
use utoipa::OpenApi;

use crate::{handlers::stream, routes::health};

#[derive(OpenApi)]
#[openapi(
    info(title = "DigestPaper API", description = "PDF summarization over hosted assistants"),
    paths(health::health_check, stream::stream_summary),
    components(schemas(health::HealthResponse)),
    tags(
        (name = "health", description = "Service status"),
        (name = "summaries", description = "Document summarization")
    )
)]
pub struct ApiDoc;

/// OpenAPI document for the JSON routes
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
