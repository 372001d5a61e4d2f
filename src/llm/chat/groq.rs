use async_trait::async_trait;
use log::{ debug, info };
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };

use super::ChatClient;
use crate::error::LlmError;
use crate::llm::{ Completion, CompletionParams, LlmConfig };
use crate::models::{ Message, Role };

pub struct GroqChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct GroqMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Serialize)]
struct GroqRequest<'a> {
    model: &'a str,
    messages: Vec<GroqMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    usage: GroqUsage,
}

#[derive(Deserialize)]
struct GroqChoice {
    message: GroqReply,
}

#[derive(Deserialize)]
struct GroqReply {
    content: Option<String>,
}

#[derive(Deserialize)]
struct GroqUsage {
    total_tokens: u64,
}

impl GroqChatClient {
    pub fn new(
        api_key: &str,
        model: String,
        base_url: String,
        timeout: std::time::Duration
    ) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key.trim())).map_err(|e|
                LlmError::InvalidApiKey(e.to_string())
            )?
        );

        let http = HttpClient::builder().default_headers(headers).timeout(timeout).build()?;

        info!("Initialized Groq client with model: {}", model);
        Ok(Self { http, model, base_url })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        Self::new(api_key, config.model.clone(), config.base_url.clone(), config.timeout)
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for GroqChatClient {
    async fn complete(
        &self,
        messages: &[Message],
        params: &CompletionParams
    ) -> Result<Completion, LlmError> {
        let req = GroqRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| GroqMessage { role: m.role, content: &m.content })
                .collect(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let url = self.completions_url();
        debug!("POST {} ({} messages)", url, messages.len());

        let resp = self.http.post(&url).json(&req).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(LlmError::Status { status: status.as_u16(), body });
        }

        let parsed: GroqResponse = serde_json::from_str(&body)?;
        let text = parsed.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;
        Ok(Completion { text, total_tokens: parsed.usage.total_tokens })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
