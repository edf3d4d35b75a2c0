// Files, vector stores and Assistants v2 endpoints

use super::client::OpenAIClient;
use crate::traits::{AssistantClient, AssistantRequest, DocumentStoreClient, ThreadRequest};
use crate::types::{
    Assistant, FileObject, ListResponse, Run, Thread, ThreadMessage, VectorStore,
    VectorStoreFileBatch,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

const FILE_PURPOSE: &str = "assistants";

#[async_trait]
impl DocumentStoreClient for OpenAIClient {
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<FileObject> {
        let size = bytes.len();
        let form = Form::new()
            .text("purpose", FILE_PURPOSE)
            .part("file", Part::bytes(bytes).file_name(filename.to_string()));

        let file: FileObject = self
            .send_json(self.http_client.post(self.url("files")).multipart(form))
            .await
            .with_context(|| format!("Failed to upload {}", filename))?;

        tracing::debug!(file_id = %file.id, bytes = size, "file uploaded");
        Ok(file)
    }

    async fn delete_file(&self, file_id: &str) -> Result<()> {
        self.delete(&format!("files/{}", file_id)).await
    }

    async fn create_vector_store(&self, name: &str) -> Result<VectorStore> {
        self.post_json("vector_stores", &serde_json::json!({ "name": name }))
            .await
    }

    async fn delete_vector_store(&self, vector_store_id: &str) -> Result<()> {
        self.delete(&format!("vector_stores/{}", vector_store_id)).await
    }

    async fn create_file_batch(
        &self,
        vector_store_id: &str,
        file_ids: Vec<String>,
    ) -> Result<VectorStoreFileBatch> {
        self.post_json(
            &format!("vector_stores/{}/file_batches", vector_store_id),
            &serde_json::json!({ "file_ids": file_ids }),
        )
        .await
    }

    async fn retrieve_file_batch(
        &self,
        vector_store_id: &str,
        batch_id: &str,
    ) -> Result<VectorStoreFileBatch> {
        self.get_json(&format!(
            "vector_stores/{}/file_batches/{}",
            vector_store_id, batch_id
        ))
        .await
    }
}

#[async_trait]
impl AssistantClient for OpenAIClient {
    async fn create_assistant(&self, request: AssistantRequest) -> Result<Assistant> {
        self.post_json("assistants", &request).await
    }

    async fn delete_assistant(&self, assistant_id: &str) -> Result<()> {
        self.delete(&format!("assistants/{}", assistant_id)).await
    }

    async fn create_thread(&self, request: ThreadRequest) -> Result<Thread> {
        self.post_json("threads", &request).await
    }

    async fn delete_thread(&self, thread_id: &str) -> Result<()> {
        self.delete(&format!("threads/{}", thread_id)).await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        self.post_json(
            &format!("threads/{}/runs", thread_id),
            &serde_json::json!({ "assistant_id": assistant_id }),
        )
        .await
    }

    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        self.get_json(&format!("threads/{}/runs/{}", thread_id, run_id))
            .await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        let page: ListResponse<ThreadMessage> = self
            .get_json(&format!("threads/{}/messages", thread_id))
            .await?;
        Ok(page.data)
    }
}
