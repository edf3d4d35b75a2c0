use digest_llm::FileCounts;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

pub type EventSender = mpsc::Sender<WorkflowEvent>;

/// Milestones emitted while a summarization runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    /// Workflow started
    InitStream {
        run_id: String,
        timestamp: i64,
    },

    Staged {
        path: String,
    },

    CollectionCreated {
        collection_id: String,
    },

    /// File batch reached a terminal state (or the ingestion deadline)
    IngestionFinished {
        batch_id: String,
        status: String,
        file_counts: FileCounts,
    },

    /// Ingestion did not fully succeed but the workflow continues
    IngestionWarning {
        message: String,
    },

    AssistantCreated {
        assistant_id: String,
    },

    ThreadCreated {
        thread_id: String,
    },

    RunFinished {
        run_id: String,
        status: String,
    },

    Summary {
        text: String,
    },

    /// Fatal error, no summary follows
    Error {
        message: String,
    },

    CleanupFinished {
        deleted: usize,
        failed: usize,
    },

    /// Workflow completed
    EndStream {
        status: String,
        total_duration_ms: u64,
    },
}

impl WorkflowEvent {
    /// Human readable progress lines for the page
    pub fn status_lines(&self) -> Vec<String> {
        match self {
            Self::Staged { path } => vec![format!("File successfully saved at: {}", path)],
            Self::CollectionCreated { .. } => vec!["Document collection created.".to_string()],
            Self::IngestionFinished {
                status, file_counts, ..
            } => vec![
                "File batch successfully uploaded.".to_string(),
                format!("File batch status: {}", status),
                format!("File count: {}", file_counts),
            ],
            Self::IngestionWarning { message } => vec![message.clone()],
            Self::AssistantCreated { .. } => vec!["Assistant configured.".to_string()],
            Self::ThreadCreated { .. } => vec!["Thread created successfully.".to_string()],
            _ => Vec::new(),
        }
    }

    /// SSE event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitStream { .. } => "init_stream",
            Self::Staged { .. } => "staged",
            Self::CollectionCreated { .. } => "collection_created",
            Self::IngestionFinished { .. } => "ingestion_finished",
            Self::IngestionWarning { .. } => "ingestion_warning",
            Self::AssistantCreated { .. } => "assistant_created",
            Self::ThreadCreated { .. } => "thread_created",
            Self::RunFinished { .. } => "run_finished",
            Self::Summary { .. } => "summary",
            Self::Error { .. } => "error",
            Self::CleanupFinished { .. } => "cleanup_finished",
            Self::EndStream { .. } => "end_stream",
        }
    }
}
