pub mod error;
pub mod generator;
pub mod prompts;
pub mod resources;
pub mod stager;
pub mod template;
pub mod types;
pub mod workflow;

pub use error::{GenerationError, StageError, TemplateError, WorkflowError};
pub use generator::AbstractGenerator;
pub use resources::{CleanupReport, RemoteResources};
pub use stager::FileStager;
pub use template::TemplateRenderer;
pub use types::{EventSender, GenerationConfig, WorkflowConfig, WorkflowEvent};
pub use workflow::{Summary, SummarizationWorkflow};
