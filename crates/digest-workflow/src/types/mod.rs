pub mod config;
pub mod events;

pub use config::{GenerationConfig, WorkflowConfig};
pub use events::{EventSender, WorkflowEvent};
