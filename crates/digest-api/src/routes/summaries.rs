use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::{error::ApiError, state::AppState, upload::read_pdf_upload, views};

/// Stage the uploaded PDF, run the workflow to completion and render the result
///
/// Workflow failures still answer 200: the page carries the error text the
/// same way it carries the summary.
pub async fn create_summary(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let upload = match read_pdf_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::warn!(error = %e, "upload rejected");
            return (e.status(), Html(views::error_page(&e.to_string())));
        }
    };

    let staged_path = match state.stager.stage(&upload.file_name, &upload.bytes).await {
        Ok(path) => path,
        Err(e) => {
            let e = ApiError::from(e);
            tracing::error!(error = %e, "staging failed");
            return (e.status(), Html(views::error_page(&e.to_string())));
        }
    };

    let mut receiver = state.workflow.spawn_run(staged_path);
    let mut events = Vec::new();
    while let Some(event) = receiver.recv().await {
        events.push(event);
    }

    (StatusCode::OK, Html(views::summary_page(&events)))
}
