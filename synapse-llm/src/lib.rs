pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod intent;
pub mod knowledge;
pub mod pipeline;
pub mod prompt;
pub mod sanitize;
pub mod topic;

#[cfg(test)]
mod testing;

pub use client::{ChatTransport, MistralTransport};
pub use config::{GatewayConfig, GenerationParams};
pub use error::{AttemptError, ErrorCategory, GatewayError};
pub use gateway::{Completion, ModelGateway};
pub use intent::{DomainFlags, Intent, classify};
pub use knowledge::KnowledgeStore;
pub use pipeline::{Answer, AnswerOrigin, ResponsePipeline};
pub use prompt::{PromptBundle, PromptComposer};
