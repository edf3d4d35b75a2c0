pub mod config;
pub mod openai;
pub mod polling;
pub mod traits;
pub mod types;

pub use config::OpenAIConfig;
pub use openai::OpenAIClient;
pub use polling::{poll_until, PollConfig, PollError, Polled};
pub use traits::{
    AssistantClient, AssistantRequest, ChatClient, ChatOptions, ChatRequest, ChatResponse,
    DocumentStoreClient, LLMClient, ThreadMessageInput, ThreadRequest, TokenUsage,
};
pub use types::{
    Assistant, AssistantTool, BatchStatus, FileCounts, FileObject, Message, MessageContent, Run, RunStatus,
    Thread, ThreadMessage, ToolResources, VectorStore, VectorStoreFileBatch,
};
