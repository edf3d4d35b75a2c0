use config::{Config as ConfigLoader, ConfigError, Environment, File};
use digest_workflow::{GenerationConfig, WorkflowConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub workflow: WorkflowSettings,
    pub staging: StagingConfig,
    pub generation: GenerationSettings,
    pub logging: LoggingConfig,

    // Secrets (from ENV only)
    #[serde(skip)]
    pub openai_api_key: String,
    #[serde(skip)]
    pub openai_base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, uploads included
    pub max_upload_bytes: usize,
    /// Applies to every route except the summary routes
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            max_upload_bytes: 50 * 1024 * 1024,
            request_timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: digest_workflow::prompts::DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkflowSettings {
    pub collection_name: String,
    pub run_timeout_secs: u64,
    pub ingestion_timeout_secs: u64,
    pub poll_interval_ms: u64,
    pub cleanup_remote: bool,
    pub abort_on_ingestion_failure: bool,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            collection_name: digest_workflow::prompts::COLLECTION_NAME.to_string(),
            run_timeout_secs: 1000,
            ingestion_timeout_secs: 600,
            poll_interval_ms: 1000,
            cleanup_remote: true,
            abort_on_ingestion_failure: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    pub dir: PathBuf,
    pub max_age_secs: u64,
    pub sweep_interval_secs: u64,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("temp"),
            max_age_secs: 24 * 60 * 60,
            sweep_interval_secs: 60 * 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Off by default: the topic form only echoes its input
    pub enabled: bool,
    pub template_dir: PathBuf,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            template_dir: PathBuf::from("."),
            temperature: 0.2,
            max_tokens: 400,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables `DIGEST_<SECTION>__<KEY>`, e.g. `DIGEST_SERVER__PORT`
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            // 1. Load default config
            .add_source(File::with_name("config/default").required(false))
            // 2. Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // 3. Environment variables override everything
            .add_source(
                Environment::with_prefix("DIGEST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;
        cfg.load_secrets();

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let mut cfg: Config = builder.build()?.try_deserialize()?;
        cfg.load_secrets();

        Ok(cfg)
    }

    fn load_secrets(&mut self) {
        self.openai_api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        self.openai_base_url = std::env::var("OPENAI_BASE_URL").ok().filter(|url| !url.is_empty());
    }

    pub fn workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig::new()
            .with_model(&self.llm.model)
            .with_collection_name(&self.workflow.collection_name)
            .with_poll_interval(Duration::from_millis(self.workflow.poll_interval_ms))
            .with_ingestion_timeout(Duration::from_secs(self.workflow.ingestion_timeout_secs))
            .with_run_timeout(Duration::from_secs(self.workflow.run_timeout_secs))
            .with_cleanup(self.workflow.cleanup_remote)
            .with_abort_on_ingestion_failure(self.workflow.abort_on_ingestion_failure)
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            model: self.llm.model.clone(),
            temperature: self.generation.temperature,
            max_tokens: self.generation.max_tokens,
            ..GenerationConfig::default()
        }
    }
}
