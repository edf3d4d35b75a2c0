use crate::types::{
    Assistant, AssistantTool, FileObject, Message, Run, Thread, ThreadMessage, ToolResources, VectorStore,
    VectorStoreFileBatch,
};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Trait for chat-based LLM interactions (GPT-4o, etc)
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Non-streaming chat completion
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}

/// Trait for the file and vector store side of the service
///
/// Each call maps to exactly one HTTP request; waiting on asynchronous
/// batches is left to [`crate::polling::poll_until`].
#[async_trait]
pub trait DocumentStoreClient: Send + Sync {
    /// Upload raw bytes as a file usable by assistants
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<FileObject>;

    async fn delete_file(&self, file_id: &str) -> Result<()>;

    async fn create_vector_store(&self, name: &str) -> Result<VectorStore>;

    async fn delete_vector_store(&self, vector_store_id: &str) -> Result<()>;

    /// Attach already uploaded files to a vector store
    async fn create_file_batch(
        &self,
        vector_store_id: &str,
        file_ids: Vec<String>,
    ) -> Result<VectorStoreFileBatch>;

    async fn retrieve_file_batch(
        &self,
        vector_store_id: &str,
        batch_id: &str,
    ) -> Result<VectorStoreFileBatch>;
}

/// Trait for assistants, threads, runs and messages
#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn create_assistant(&self, request: AssistantRequest) -> Result<Assistant>;

    async fn delete_assistant(&self, assistant_id: &str) -> Result<()>;

    async fn create_thread(&self, request: ThreadRequest) -> Result<Thread>;

    async fn delete_thread(&self, thread_id: &str) -> Result<()>;

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run>;

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;

    /// Messages in the service's default order (most recent first)
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>>;
}

/// Convenience trait for clients that cover the whole surface
pub trait LLMClient: ChatClient + DocumentStoreClient + AssistantClient {}

impl<T: ChatClient + DocumentStoreClient + AssistantClient> LLMClient for T {}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub options: ChatOptions,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            options: ChatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: Option<String>,
    pub usage: Option<TokenUsage>,
    pub finish_reason: Option<String>,
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// Payload for `POST /assistants`
#[derive(Debug, Clone, Serialize)]
pub struct AssistantRequest {
    pub model: String,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub tools: Vec<AssistantTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<ToolResources>,
}

impl AssistantRequest {
    pub fn new(model: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            instructions: instructions.into(),
            name: None,
            tools: Vec::new(),
            tool_resources: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enable file search scoped to the given vector store
    pub fn with_file_search(mut self, vector_store_id: impl Into<String>) -> Self {
        self.tools.push(AssistantTool::file_search());
        self.tool_resources = Some(ToolResources::file_search(vec![vector_store_id.into()]));
        self
    }
}

/// Initial message of a thread
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadMessageInput {
    pub role: String,
    pub content: String,
}

impl ThreadMessageInput {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Payload for `POST /threads`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ThreadRequest {
    pub messages: Vec<ThreadMessageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<ToolResources>,
}

impl ThreadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_message(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ThreadMessageInput::user(content));
        self
    }

    pub fn with_file_search(mut self, vector_store_id: impl Into<String>) -> Self {
        self.tool_resources = Some(ToolResources::file_search(vec![vector_store_id.into()]));
        self
    }
}
