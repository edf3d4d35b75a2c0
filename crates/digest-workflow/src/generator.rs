use crate::error::GenerationError;
use crate::template::TemplateRenderer;
use crate::types::GenerationConfig;
use digest_llm::{ChatClient, ChatOptions, ChatRequest, Message};
use serde_json::json;
use std::sync::Arc;

/// Turns a topic sentence into a short abstract with one chat completion
#[derive(Clone)]
pub struct AbstractGenerator {
    chat: Arc<dyn ChatClient>,
    renderer: TemplateRenderer,
    config: GenerationConfig,
}

impl AbstractGenerator {
    pub fn new(chat: Arc<dyn ChatClient>, renderer: TemplateRenderer, config: GenerationConfig) -> Self {
        Self {
            chat,
            renderer,
            config,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Both templates must render before the completion is requested.
    pub async fn generate(&self, topic: &str) -> Result<String, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::EmptyTopic);
        }

        let system_prompt = self
            .renderer
            .load(&self.config.system_template, &json!({}))
            .await
            .ok_or_else(|| GenerationError::TemplateMissing(self.config.system_template.clone()))?;

        let user_prompt = self
            .renderer
            .load(&self.config.user_template, &json!({ "topic": topic }))
            .await
            .ok_or_else(|| GenerationError::TemplateMissing(self.config.user_template.clone()))?;

        let request = ChatRequest::new(
            &self.config.model,
            vec![Message::system(system_prompt), Message::human(user_prompt)],
        )
        .with_options(
            ChatOptions::new()
                .temperature(self.config.temperature)
                .max_tokens(self.config.max_tokens),
        );

        let response = self.chat.chat(request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "abstract generated"
            );
        }

        response
            .content
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}
