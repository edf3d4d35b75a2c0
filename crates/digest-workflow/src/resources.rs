use digest_llm::{AssistantClient, DocumentStoreClient};

/// Remote handles created by one workflow execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteResources {
    pub file_ids: Vec<String>,
    pub vector_store_id: Option<String>,
    pub assistant_id: Option<String>,
    pub thread_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub deleted: usize,
    pub failed: usize,
}

impl RemoteResources {
    pub fn is_empty(&self) -> bool {
        self.file_ids.is_empty()
            && self.vector_store_id.is_none()
            && self.assistant_id.is_none()
            && self.thread_id.is_none()
    }

    /// Delete everything tracked, dependents first.
    ///
    /// Failures are logged and counted; every handle gets one attempt.
    pub async fn release(
        &mut self,
        documents: &dyn DocumentStoreClient,
        assistants: &dyn AssistantClient,
    ) -> CleanupReport {
        let mut report = CleanupReport::default();

        if let Some(thread_id) = self.thread_id.take() {
            record(&mut report, "thread", &thread_id, assistants.delete_thread(&thread_id).await);
        }
        if let Some(assistant_id) = self.assistant_id.take() {
            record(
                &mut report,
                "assistant",
                &assistant_id,
                assistants.delete_assistant(&assistant_id).await,
            );
        }
        if let Some(vector_store_id) = self.vector_store_id.take() {
            record(
                &mut report,
                "vector store",
                &vector_store_id,
                documents.delete_vector_store(&vector_store_id).await,
            );
        }
        for file_id in self.file_ids.drain(..) {
            record(&mut report, "file", &file_id, documents.delete_file(&file_id).await);
        }

        report
    }
}

fn record(report: &mut CleanupReport, kind: &str, id: &str, result: anyhow::Result<()>) {
    match result {
        Ok(()) => {
            tracing::debug!(kind, id, "remote resource deleted");
            report.deleted += 1;
        }
        Err(e) => {
            tracing::warn!(kind, id, error = %e, "failed to delete remote resource");
            report.failed += 1;
        }
    }
}
