use digest_llm::FileCounts;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    #[error("Invalid upload name: {0:?}")]
    InvalidName(String),

    #[error("Failed to stage {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template file not found: {0}")]
    NotFound(String),

    #[error("Failed to read template {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TemplateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Error: File path is invalid or not found.")]
    InvalidStagedPath(PathBuf),

    #[error("Failed to read staged file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to {step}: {source}")]
    Remote {
        step: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("File batch ended with status {status} ({file_counts})")]
    IngestionFailed { status: String, file_counts: FileCounts },

    #[error("Run failed with status: {status}")]
    RunFailed { status: String },

    #[error("Run completed without a text response")]
    EmptyResponse,
}

impl WorkflowError {
    pub(crate) fn remote(step: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| Self::Remote { step, source }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Please enter a topic sentence.")]
    EmptyTopic,

    #[error("Template file not found: {0}")]
    TemplateMissing(String),

    #[error("Chat completion failed: {0}")]
    Remote(#[from] anyhow::Error),

    #[error("Chat completion returned no content")]
    EmptyResponse,
}
