use axum::{
    extract::{Multipart, State},
    response::sse::{Event, KeepAlive, Sse},
};
use digest_workflow::WorkflowEvent;
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::ReceiverStream;

use crate::{error::ApiResult, state::AppState, upload::read_pdf_upload};

/// Upload a PDF and stream workflow progress using Server-Sent Events
///
/// Each event is named after its `type` and carries the event as JSON. The
/// stream ends after `end_stream`.
#[utoipa::path(
    post,
    path = "/api/summaries",
    request_body(content = String, content_type = "multipart/form-data", description = "PDF in field `file`"),
    responses(
        (status = 200, description = "Streaming response", content_type = "text/event-stream"),
        (status = 400, description = "Missing, empty or non-PDF upload")
    ),
    tag = "summaries"
)]
pub async fn stream_summary(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    // 1. Validate and stage the upload
    let upload = read_pdf_upload(&mut multipart).await?;
    let staged_path = state.stager.stage(&upload.file_name, &upload.bytes).await?;

    // 2. Spawn the workflow
    let event_receiver = state.workflow.spawn_run(staged_path);

    // 3. Convert workflow events to SSE events
    let sse_stream = ReceiverStream::new(event_receiver).map(|event| Ok::<Event, Infallible>(to_sse(&event)));

    Ok(Sse::new(sse_stream).keep_alive(KeepAlive::default()))
}

fn to_sse(event: &WorkflowEvent) -> Event {
    match Event::default().event(event.name()).json_data(event) {
        Ok(sse_event) => sse_event,
        Err(e) => {
            tracing::error!(error = %e, event = event.name(), "failed to encode event");
            Event::default().event(event.name()).data("{}")
        }
    }
}
