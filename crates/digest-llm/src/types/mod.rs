pub mod message;
pub mod resources;

pub use message::Message;
pub use resources::{
    Assistant, AssistantTool, BatchStatus, DeletionStatus, FileCounts, FileObject, FileSearchResources,
    ListResponse, MessageContent, MessageText, Run, RunError, RunStatus, Thread, ThreadMessage,
    ToolResources, VectorStore, VectorStoreFileBatch,
};
