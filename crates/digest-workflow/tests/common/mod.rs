// Scripted in-memory stand-in for the hosted document store and assistants
#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use digest_llm::{
    Assistant, AssistantClient, AssistantRequest, BatchStatus, DocumentStoreClient, FileCounts, FileObject,
    MessageContent, Run, RunStatus, Thread, ThreadMessage, ThreadRequest, VectorStore, VectorStoreFileBatch,
};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct Calls {
    pub vector_stores_created: usize,
    pub files_uploaded: Vec<(String, usize)>,
    pub assistants: Vec<AssistantRequest>,
    pub threads: Vec<ThreadRequest>,
    pub runs_created: usize,
    pub run_polls: usize,
    pub deleted: Vec<String>,
}

/// Statuses are consumed front to back; the last one repeats.
pub struct MockOpenAI {
    batch_statuses: Mutex<VecDeque<(BatchStatus, FileCounts)>>,
    run_statuses: Mutex<VecDeque<RunStatus>>,
    reply: String,
    fail_on: Option<&'static str>,
    pub calls: Mutex<Calls>,
}

impl MockOpenAI {
    pub fn new() -> Self {
        Self {
            batch_statuses: Mutex::new(VecDeque::from([(BatchStatus::Completed, completed_counts())])),
            run_statuses: Mutex::new(VecDeque::from([RunStatus::InProgress, RunStatus::Completed])),
            reply: "A concise summary of the paper.".to_string(),
            fail_on: None,
            calls: Mutex::new(Calls::default()),
        }
    }

    pub fn with_batch_statuses(self, statuses: Vec<(BatchStatus, FileCounts)>) -> Self {
        *self.batch_statuses.lock().unwrap() = statuses.into();
        self
    }

    pub fn with_run_statuses(self, statuses: Vec<RunStatus>) -> Self {
        *self.run_statuses.lock().unwrap() = statuses.into();
        self
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }

    /// Make the named operation return an error
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub fn deleted(&self) -> Vec<String> {
        self.calls.lock().unwrap().deleted.clone()
    }

    fn check(&self, operation: &str) -> Result<()> {
        if self.fail_on == Some(operation) {
            bail!("OpenAI API error (500 Internal Server Error): {} unavailable", operation);
        }
        Ok(())
    }
}

pub fn completed_counts() -> FileCounts {
    FileCounts {
        completed: 1,
        total: 1,
        ..Default::default()
    }
}

fn next<T: Clone>(queue: &Mutex<VecDeque<T>>, fallback: T) -> T {
    let mut queue = queue.lock().unwrap();
    if queue.len() > 1 {
        queue.pop_front().unwrap_or(fallback)
    } else {
        queue.front().cloned().unwrap_or(fallback)
    }
}

#[async_trait]
impl DocumentStoreClient for MockOpenAI {
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<FileObject> {
        self.check("upload_file")?;
        let mut calls = self.calls.lock().unwrap();
        calls.files_uploaded.push((filename.to_string(), bytes.len()));
        Ok(FileObject {
            id: format!("file_{}", calls.files_uploaded.len()),
            filename: filename.to_string(),
            bytes: bytes.len() as u64,
            purpose: "assistants".to_string(),
            created_at: 0,
        })
    }

    async fn delete_file(&self, file_id: &str) -> Result<()> {
        self.calls.lock().unwrap().deleted.push(file_id.to_string());
        Ok(())
    }

    async fn create_vector_store(&self, name: &str) -> Result<VectorStore> {
        self.check("create_vector_store")?;
        let mut calls = self.calls.lock().unwrap();
        calls.vector_stores_created += 1;
        Ok(VectorStore {
            id: format!("vs_{}", calls.vector_stores_created),
            name: Some(name.to_string()),
            status: Some("completed".to_string()),
            file_counts: FileCounts::default(),
            created_at: 0,
        })
    }

    async fn delete_vector_store(&self, vector_store_id: &str) -> Result<()> {
        self.calls.lock().unwrap().deleted.push(vector_store_id.to_string());
        Ok(())
    }

    async fn create_file_batch(&self, vector_store_id: &str, file_ids: Vec<String>) -> Result<VectorStoreFileBatch> {
        self.check("create_file_batch")?;
        Ok(VectorStoreFileBatch {
            id: "vsfb_1".to_string(),
            vector_store_id: vector_store_id.to_string(),
            status: BatchStatus::InProgress,
            file_counts: FileCounts {
                in_progress: file_ids.len() as u32,
                total: file_ids.len() as u32,
                ..Default::default()
            },
            created_at: 0,
        })
    }

    async fn retrieve_file_batch(&self, vector_store_id: &str, batch_id: &str) -> Result<VectorStoreFileBatch> {
        let (status, file_counts) = next(&self.batch_statuses, (BatchStatus::Completed, completed_counts()));
        Ok(VectorStoreFileBatch {
            id: batch_id.to_string(),
            vector_store_id: vector_store_id.to_string(),
            status,
            file_counts,
            created_at: 0,
        })
    }
}

#[async_trait]
impl AssistantClient for MockOpenAI {
    async fn create_assistant(&self, request: AssistantRequest) -> Result<Assistant> {
        self.check("create_assistant")?;
        let mut calls = self.calls.lock().unwrap();
        calls.assistants.push(request.clone());
        Ok(Assistant {
            id: format!("asst_{}", calls.assistants.len()),
            name: request.name,
            model: request.model,
            instructions: Some(request.instructions),
            tools: request.tools,
            tool_resources: request.tool_resources,
        })
    }

    async fn delete_assistant(&self, assistant_id: &str) -> Result<()> {
        self.calls.lock().unwrap().deleted.push(assistant_id.to_string());
        Ok(())
    }

    async fn create_thread(&self, request: ThreadRequest) -> Result<Thread> {
        self.check("create_thread")?;
        let mut calls = self.calls.lock().unwrap();
        calls.threads.push(request.clone());
        Ok(Thread {
            id: format!("thread_{}", calls.threads.len()),
            created_at: 0,
            tool_resources: request.tool_resources,
        })
    }

    async fn delete_thread(&self, thread_id: &str) -> Result<()> {
        self.check("delete_thread")?;
        self.calls.lock().unwrap().deleted.push(thread_id.to_string());
        Ok(())
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        self.check("create_run")?;
        let mut calls = self.calls.lock().unwrap();
        calls.runs_created += 1;
        Ok(Run {
            id: format!("run_{}", calls.runs_created),
            thread_id: thread_id.to_string(),
            assistant_id: assistant_id.to_string(),
            status: RunStatus::Queued,
            last_error: None,
            created_at: 0,
        })
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        self.calls.lock().unwrap().run_polls += 1;
        Ok(Run {
            id: run_id.to_string(),
            thread_id: thread_id.to_string(),
            assistant_id: String::new(),
            status: next(&self.run_statuses, RunStatus::Completed),
            last_error: None,
            created_at: 0,
        })
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        self.check("list_messages")?;
        // Most recent first
        Ok(vec![
            ThreadMessage {
                id: "msg_2".to_string(),
                thread_id: thread_id.to_string(),
                role: "assistant".to_string(),
                content: vec![MessageContent::text(self.reply.clone())],
                run_id: Some("run_1".to_string()),
                created_at: 2,
            },
            ThreadMessage {
                id: "msg_1".to_string(),
                thread_id: thread_id.to_string(),
                role: "user".to_string(),
                content: vec![MessageContent::text("Summarize the paper")],
                run_id: None,
                created_at: 1,
            },
        ])
    }
}
