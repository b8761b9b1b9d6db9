//! src/llm/mod.rs

use async_trait::async_trait;
use log::debug;

use crate::config::{AiConfig, MessageOptions};
use crate::errors::ProviderError;

pub mod openai;

pub use openai::OpenAICompatibleClient;

/// An AI backend that turns a diff into a commit message.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Returns the name of the provider behind this client.
    fn name(&self) -> &str;

    /// Sends the diff with the message options and returns the raw message.
    async fn generate_commit_message(
        &self,
        diff: &str,
        opts: &MessageOptions,
    ) -> Result<String, ProviderError>;
}

/// Builds a client from a resolved config.
pub trait ProviderFactory {
    fn create(&self, cfg: &AiConfig) -> Result<Box<dyn LLMClient>, ProviderError>;
}

/// The production factory: every provider speaks the OpenAI chat API.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpProviderFactory;

impl ProviderFactory for HttpProviderFactory {
    fn create(&self, cfg: &AiConfig) -> Result<Box<dyn LLMClient>, ProviderError> {
        debug!("creating client for provider {}", cfg.provider_kind());
        let client = OpenAICompatibleClient::new(
            &cfg.api_key,
            cfg.proxy.as_deref(),
            &cfg.url,
            &cfg.provider,
            cfg.message.max_redirects,
        )?;
        Ok(Box::new(client))
    }
}
