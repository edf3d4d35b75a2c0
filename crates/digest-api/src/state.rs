use crate::config::Config;
use digest_llm::LLMClient;
use digest_workflow::{AbstractGenerator, FileStager, SummarizationWorkflow, TemplateRenderer};
use std::sync::Arc;

/// Shared application state passed to all handlers
///
/// Built once at startup from the loaded [`Config`] and a single provider
/// client; nothing here is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub stager: FileStager,
    pub workflow: SummarizationWorkflow,
    /// Present only when `generation.enabled` is set
    pub generator: Option<AbstractGenerator>,
}

impl AppState {
    pub fn new<C>(config: Config, client: Arc<C>) -> Self
    where
        C: LLMClient + 'static,
    {
        let stager = FileStager::new(&config.staging.dir);
        let workflow = SummarizationWorkflow::new(client.clone(), client.clone(), config.workflow_config());

        let generator = config.generation.enabled.then(|| {
            AbstractGenerator::new(
                client,
                TemplateRenderer::new(&config.generation.template_dir),
                config.generation_config(),
            )
        });

        Self {
            config: Arc::new(config),
            stager,
            workflow,
            generator,
        }
    }
}
