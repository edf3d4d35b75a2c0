pub mod assistants;
pub mod client;

pub use client::OpenAIClient;
