// Fixed-response provider used to drive the router end to end
#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use digest_llm::{
    Assistant, AssistantClient, AssistantRequest, BatchStatus, ChatClient, ChatRequest, ChatResponse,
    DocumentStoreClient, FileCounts, FileObject, MessageContent, Run, RunStatus, Thread, ThreadMessage,
    ThreadRequest, VectorStore, VectorStoreFileBatch,
};
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct StubOpenAI {
    pub run_status: RunStatus,
    pub summary: String,
    pub chat_reply: String,
    pub vector_stores_created: AtomicUsize,
    pub deletions: AtomicUsize,
}

impl StubOpenAI {
    pub fn completing() -> Self {
        Self {
            run_status: RunStatus::Completed,
            summary: "**Context and Motivation:** sparse models.".to_string(),
            chat_reply: "We study sparse attention.".to_string(),
            vector_stores_created: AtomicUsize::new(0),
            deletions: AtomicUsize::new(0),
        }
    }

    pub fn failing_run() -> Self {
        Self {
            run_status: RunStatus::Failed,
            ..Self::completing()
        }
    }

    /// Run never leaves `in_progress`
    pub fn stalled_run() -> Self {
        Self {
            run_status: RunStatus::InProgress,
            ..Self::completing()
        }
    }
}

fn counts() -> FileCounts {
    FileCounts {
        completed: 1,
        total: 1,
        ..Default::default()
    }
}

#[async_trait]
impl ChatClient for StubOpenAI {
    async fn chat(&self, _request: ChatRequest) -> Result<ChatResponse> {
        Ok(ChatResponse {
            content: Some(self.chat_reply.clone()),
            usage: None,
            finish_reason: Some("stop".to_string()),
            raw: serde_json::Value::Null,
        })
    }
}

#[async_trait]
impl DocumentStoreClient for StubOpenAI {
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<FileObject> {
        Ok(FileObject {
            id: "file_1".to_string(),
            filename: filename.to_string(),
            bytes: bytes.len() as u64,
            purpose: "assistants".to_string(),
            created_at: 0,
        })
    }

    async fn delete_file(&self, _file_id: &str) -> Result<()> {
        self.deletions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn create_vector_store(&self, name: &str) -> Result<VectorStore> {
        let n = self.vector_stores_created.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(VectorStore {
            id: format!("vs_{}", n),
            name: Some(name.to_string()),
            status: None,
            file_counts: FileCounts::default(),
            created_at: 0,
        })
    }

    async fn delete_vector_store(&self, _vector_store_id: &str) -> Result<()> {
        self.deletions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn create_file_batch(&self, vector_store_id: &str, _file_ids: Vec<String>) -> Result<VectorStoreFileBatch> {
        self.retrieve_file_batch(vector_store_id, "vsfb_1").await
    }

    async fn retrieve_file_batch(&self, vector_store_id: &str, batch_id: &str) -> Result<VectorStoreFileBatch> {
        Ok(VectorStoreFileBatch {
            id: batch_id.to_string(),
            vector_store_id: vector_store_id.to_string(),
            status: BatchStatus::Completed,
            file_counts: counts(),
            created_at: 0,
        })
    }
}

#[async_trait]
impl AssistantClient for StubOpenAI {
    async fn create_assistant(&self, request: AssistantRequest) -> Result<Assistant> {
        Ok(Assistant {
            id: "asst_1".to_string(),
            name: request.name,
            model: request.model,
            instructions: Some(request.instructions),
            tools: request.tools,
            tool_resources: request.tool_resources,
        })
    }

    async fn delete_assistant(&self, _assistant_id: &str) -> Result<()> {
        self.deletions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn create_thread(&self, request: ThreadRequest) -> Result<Thread> {
        Ok(Thread {
            id: "thread_1".to_string(),
            created_at: 0,
            tool_resources: request.tool_resources,
        })
    }

    async fn delete_thread(&self, _thread_id: &str) -> Result<()> {
        self.deletions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        Ok(Run {
            id: "run_1".to_string(),
            thread_id: thread_id.to_string(),
            assistant_id: assistant_id.to_string(),
            status: RunStatus::Queued,
            last_error: None,
            created_at: 0,
        })
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        Ok(Run {
            id: run_id.to_string(),
            thread_id: thread_id.to_string(),
            assistant_id: "asst_1".to_string(),
            status: self.run_status,
            last_error: None,
            created_at: 0,
        })
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        Ok(vec![ThreadMessage {
            id: "msg_1".to_string(),
            thread_id: thread_id.to_string(),
            role: "assistant".to_string(),
            content: vec![MessageContent::text(self.summary.clone())],
            run_id: Some("run_1".to_string()),
            created_at: 0,
        }])
    }
}
