pub mod groq;

use async_trait::async_trait;
use std::sync::Arc;
use super::{ Completion, CompletionParams, LlmConfig };
use self::groq::GroqChatClient;
use crate::error::LlmError;
use crate::models::Message;

/// One blocking round trip against a completion API. Implementations do not
/// retry; a failed call is reported once.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams
    ) -> Result<Completion, LlmError>;

    fn model(&self) -> &str;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, LlmError> {
    let client = GroqChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
