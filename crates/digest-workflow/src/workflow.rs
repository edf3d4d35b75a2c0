use crate::error::WorkflowError;
use crate::resources::RemoteResources;
use crate::types::{EventSender, WorkflowConfig, WorkflowEvent};
use digest_llm::{
    poll_until, AssistantClient, AssistantRequest, DocumentStoreClient, FileCounts, RunStatus, ThreadRequest,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Result of a completed summarization
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub text: String,
    pub file_counts: FileCounts,
}

/// Drives one document through collection, ingestion, assistant, thread and run.
///
/// Every call to [`SummarizationWorkflow::run`] allocates fresh remote
/// handles; nothing is reused between runs.
#[derive(Clone)]
pub struct SummarizationWorkflow {
    documents: Arc<dyn DocumentStoreClient>,
    assistants: Arc<dyn AssistantClient>,
    config: WorkflowConfig,
}

impl SummarizationWorkflow {
    pub fn new(
        documents: Arc<dyn DocumentStoreClient>,
        assistants: Arc<dyn AssistantClient>,
        config: WorkflowConfig,
    ) -> Self {
        Self {
            documents,
            assistants,
            config,
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Spawn execution in background, return event receiver
    pub fn spawn_run(&self, staged_path: PathBuf) -> mpsc::Receiver<WorkflowEvent> {
        let (tx, rx) = mpsc::channel(64);
        let workflow = self.clone();

        tokio::spawn(async move {
            // Outcome is reported through the channel
            let _ = workflow.run(&staged_path, &tx).await;
        });

        rx
    }

    /// Run to a terminal state, emitting milestones on `events`.
    ///
    /// Remote resources are released on every exit path when
    /// `cleanup_remote` is set.
    pub async fn run(&self, staged_path: &Path, events: &EventSender) -> Result<Summary, WorkflowError> {
        let start_time = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();

        tracing::info!(run_id = %run_id, path = %staged_path.display(), "summarization started");
        emit(
            events,
            WorkflowEvent::InitStream {
                run_id: run_id.clone(),
                timestamp: chrono::Utc::now().timestamp_millis(),
            },
        )
        .await;

        let mut resources = RemoteResources::default();
        let result = self.execute(staged_path, events, &mut resources).await;

        match &result {
            Ok(summary) => {
                tracing::info!(run_id = %run_id, chars = summary.text.len(), "summarization completed");
                emit(
                    events,
                    WorkflowEvent::Summary {
                        text: summary.text.clone(),
                    },
                )
                .await;
            }
            Err(e) => {
                tracing::error!(run_id = %run_id, error = %e, "summarization failed");
                emit(events, WorkflowEvent::Error { message: e.to_string() }).await;
            }
        }

        if self.config.cleanup_remote && !resources.is_empty() {
            let report = resources
                .release(self.documents.as_ref(), self.assistants.as_ref())
                .await;
            emit(
                events,
                WorkflowEvent::CleanupFinished {
                    deleted: report.deleted,
                    failed: report.failed,
                },
            )
            .await;
        }

        emit(
            events,
            WorkflowEvent::EndStream {
                status: if result.is_ok() { "completed" } else { "failed" }.to_string(),
                total_duration_ms: start_time.elapsed().as_millis() as u64,
            },
        )
        .await;

        result
    }

    async fn execute(
        &self,
        staged_path: &Path,
        events: &EventSender,
        resources: &mut RemoteResources,
    ) -> Result<Summary, WorkflowError> {
        let (filename, bytes) = read_staged(staged_path).await?;
        emit(
            events,
            WorkflowEvent::Staged {
                path: staged_path.display().to_string(),
            },
        )
        .await;

        // 1. Document collection
        let store = self
            .documents
            .create_vector_store(&self.config.collection_name)
            .await
            .map_err(WorkflowError::remote("create document collection"))?;
        resources.vector_store_id = Some(store.id.clone());
        tracing::info!(vector_store_id = %store.id, "document collection created");
        emit(
            events,
            WorkflowEvent::CollectionCreated {
                collection_id: store.id.clone(),
            },
        )
        .await;

        // 2. Upload + ingestion batch
        let file = self
            .documents
            .upload_file(&filename, bytes)
            .await
            .map_err(WorkflowError::remote("upload document"))?;
        resources.file_ids.push(file.id.clone());

        let batch = self
            .documents
            .create_file_batch(&store.id, vec![file.id.clone()])
            .await
            .map_err(WorkflowError::remote("create file batch"))?;

        let documents = self.documents.as_ref();
        let batch_id = batch.id.clone();
        let (store_ref, batch_ref) = (store.id.as_str(), batch_id.as_str());
        let polled = poll_until(
            &self.config.ingestion_poll,
            batch,
            |b| b.status.is_terminal(),
            move || documents.retrieve_file_batch(store_ref, batch_ref),
        )
        .await
        .map_err(|e| WorkflowError::remote("wait for file batch")(e.into()))?;

        let batch = polled.value;
        tracing::info!(
            batch_id = %batch.id,
            status = %batch.status,
            file_counts = %batch.file_counts,
            "file batch finished"
        );
        emit(
            events,
            WorkflowEvent::IngestionFinished {
                batch_id: batch.id.clone(),
                status: batch.status.to_string(),
                file_counts: batch.file_counts,
            },
        )
        .await;

        if !batch.fully_succeeded() {
            if self.config.abort_on_ingestion_failure {
                return Err(WorkflowError::IngestionFailed {
                    status: batch.status.to_string(),
                    file_counts: batch.file_counts,
                });
            }

            let message = if polled.timed_out {
                format!(
                    "File batch still {} after the ingestion deadline; continuing.",
                    batch.status
                )
            } else {
                format!(
                    "File batch ended with status {} ({}); continuing.",
                    batch.status, batch.file_counts
                )
            };
            tracing::warn!("{}", message);
            emit(events, WorkflowEvent::IngestionWarning { message }).await;
        }

        // 3. Assistant bound to the collection
        let assistant = self
            .assistants
            .create_assistant(
                AssistantRequest::new(&self.config.model, &self.config.assistant_instructions)
                    .with_file_search(&store.id),
            )
            .await
            .map_err(WorkflowError::remote("create assistant"))?;
        resources.assistant_id = Some(assistant.id.clone());
        tracing::info!(assistant_id = %assistant.id, "assistant configured");
        emit(
            events,
            WorkflowEvent::AssistantCreated {
                assistant_id: assistant.id.clone(),
            },
        )
        .await;

        // 4. Thread seeded with the summary instruction
        let thread = self
            .assistants
            .create_thread(
                ThreadRequest::new()
                    .user_message(&self.config.summary_prompt)
                    .with_file_search(&store.id),
            )
            .await
            .map_err(WorkflowError::remote("create thread"))?;
        resources.thread_id = Some(thread.id.clone());
        tracing::info!(thread_id = %thread.id, "thread created");
        emit(
            events,
            WorkflowEvent::ThreadCreated {
                thread_id: thread.id.clone(),
            },
        )
        .await;

        // 5. Run and wait
        let run = self
            .assistants
            .create_run(&thread.id, &assistant.id)
            .await
            .map_err(WorkflowError::remote("start run"))?;

        let assistants = self.assistants.as_ref();
        let run_id = run.id.clone();
        let (thread_ref, run_ref) = (thread.id.as_str(), run_id.as_str());
        let polled = poll_until(
            &self.config.run_poll,
            run,
            |r| r.status.is_terminal(),
            move || assistants.retrieve_run(thread_ref, run_ref),
        )
        .await
        .map_err(|e| WorkflowError::remote("wait for run")(e.into()))?;

        let run = polled.value;
        tracing::info!(run_id = %run.id, status = %run.status, timed_out = polled.timed_out, "run finished");
        emit(
            events,
            WorkflowEvent::RunFinished {
                run_id: run.id.clone(),
                status: run.status.to_string(),
            },
        )
        .await;

        if run.status != RunStatus::Completed {
            if let Some(last_error) = &run.last_error {
                tracing::warn!(code = %last_error.code, message = %last_error.message, "run error");
            }
            return Err(WorkflowError::RunFailed {
                status: run.status.to_string(),
            });
        }

        // 6. Most recent message holds the answer
        let messages = self
            .assistants
            .list_messages(&thread.id)
            .await
            .map_err(WorkflowError::remote("list thread messages"))?;

        let text = messages
            .first()
            .and_then(|message| message.first_text())
            .filter(|text| !text.is_empty())
            .ok_or(WorkflowError::EmptyResponse)?;

        Ok(Summary {
            text: text.to_string(),
            file_counts: batch.file_counts,
        })
    }
}

/// Read the staged payload, rejecting anything that is not a regular file
async fn read_staged(path: &Path) -> Result<(String, Vec<u8>), WorkflowError> {
    let is_file = tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);

    let filename = path.file_name().and_then(|name| name.to_str());

    match (is_file, filename) {
        (true, Some(filename)) => {
            let bytes = tokio::fs::read(path).await?;
            Ok((filename.to_string(), bytes))
        }
        _ => Err(WorkflowError::InvalidStagedPath(path.to_path_buf())),
    }
}

async fn emit(events: &EventSender, event: WorkflowEvent) {
    if events.send(event).await.is_err() {
        tracing::debug!("workflow event receiver dropped");
    }
}
