use crate::prompts;
use digest_llm::PollConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub model: String,
    pub collection_name: String,
    pub assistant_instructions: String,
    pub summary_prompt: String,
    pub ingestion_poll: PollConfig,
    /// Upper bound on waiting for the run to finish
    pub run_poll: PollConfig,
    /// Delete created remote resources once the workflow exits
    pub cleanup_remote: bool,
    /// Fail instead of continuing when the file batch did not fully succeed
    pub abort_on_ingestion_failure: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            model: prompts::DEFAULT_MODEL.to_string(),
            collection_name: prompts::COLLECTION_NAME.to_string(),
            assistant_instructions: prompts::ASSISTANT_INSTRUCTIONS.to_string(),
            summary_prompt: prompts::SUMMARY_PROMPT.to_string(),
            ingestion_poll: PollConfig::new(Duration::from_millis(1000), Duration::from_secs(600)),
            run_poll: PollConfig::new(Duration::from_millis(1000), Duration::from_secs(1000)),
            cleanup_remote: true,
            abort_on_ingestion_failure: false,
        }
    }
}

impl WorkflowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.ingestion_poll.interval = interval;
        self.run_poll.interval = interval;
        self
    }

    pub fn with_ingestion_timeout(mut self, timeout: Duration) -> Self {
        self.ingestion_poll.timeout = timeout;
        self
    }

    pub fn with_run_timeout(mut self, timeout: Duration) -> Self {
        self.run_poll.timeout = timeout;
        self
    }

    pub fn with_cleanup(mut self, enabled: bool) -> Self {
        self.cleanup_remote = enabled;
        self
    }

    pub fn with_abort_on_ingestion_failure(mut self, enabled: bool) -> Self {
        self.abort_on_ingestion_failure = enabled;
        self
    }
}

/// Settings of the topic-to-abstract path
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_template: String,
    pub user_template: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: prompts::DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: 400,
            system_template: prompts::SYSTEM_TEMPLATE.to_string(),
            user_template: prompts::USER_TEMPLATE.to_string(),
        }
    }
}
