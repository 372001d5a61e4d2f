use crate::error::RelayError;
use crate::llm::chat::{ ChatClient, new_client };
use crate::llm::{ CompletionParams, LlmConfig };
use crate::models::{ ChatResponse, Message };

use log::{ info, warn, error };
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

const PREVIEW_LEN: usize = 50;

/// Stateless relay between callers and the completion API. Holds no session
/// data, so one instance is shared by every request.
#[derive(Clone)]
pub struct RelayService {
    client: Option<Arc<dyn ChatClient>>,
    params: CompletionParams,
}

impl RelayService {
    pub fn new(client: Option<Arc<dyn ChatClient>>, params: CompletionParams) -> Self {
        Self { client, params }
    }

    /// Builds the adapter from config. A construction failure leaves the
    /// service running in degraded mode.
    pub fn from_config(config: &LlmConfig) -> Self {
        let client = match new_client(config) {
            Ok(client) => {
                info!("Groq client initialized successfully with model: {}", client.model());
                Some(client)
            }
            Err(e) => {
                error!("Failed to initialize Groq client: {}", e);
                None
            }
        };
        Self::new(client, config.params())
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    pub async fn relay(
        &self,
        message: &str,
        history: Option<Vec<Message>>
    ) -> Result<ChatResponse, RelayError> {
        if message.trim().is_empty() {
            return Err(RelayError::EmptyMessage);
        }
        let client = self.client.as_ref().ok_or(RelayError::Unavailable)?;

        let request_id = Uuid::new_v4();
        info!("[{}] Received chat request: {}...", request_id, preview(message));

        let mut messages = history.unwrap_or_default();
        messages.push(Message::user(message));

        let started = Instant::now();
        match client.complete(&messages, &self.params).await {
            Ok(completion) => {
                let execution_time = started.elapsed().as_secs_f64();
                info!(
                    "[{}] Received response in {:.2}s, tokens: {}",
                    request_id,
                    execution_time,
                    completion.total_tokens
                );
                Ok(ChatResponse::success(completion.text, completion.total_tokens, execution_time))
            }
            Err(e) => {
                warn!("[{}] Error calling Groq API: {}", request_id, e);
                Ok(ChatResponse::failure(e))
            }
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_LEN).collect()
}
