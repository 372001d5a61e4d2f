use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use std::time::Duration;
use url::Url;

use crate::error::ClientError;
use crate::models::{ ChatRequest, ChatResponse };

/// The client's view of the relay service.
#[async_trait]
pub trait RelayApi: Send + Sync {
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse, ClientError>;
}

pub struct HttpRelayClient {
    http: HttpClient,
    chat_url: Url,
}

impl HttpRelayClient {
    pub fn new(relay_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut base = Url::parse(relay_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let chat_url = base.join("chat")?;

        let http = HttpClient::builder().timeout(timeout).build().map_err(ClientError::Connection)?;

        Ok(Self { http, chat_url })
    }

    pub fn chat_url(&self) -> &Url {
        &self.chat_url
    }
}

#[async_trait]
impl RelayApi for HttpRelayClient {
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse, ClientError> {
        debug!("POST {}", self.chat_url);
        let resp = self.http
            .post(self.chat_url.clone())
            .json(req)
            .send().await
            .map_err(ClientError::Connection)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = resp.text().await.map_err(ClientError::Connection)?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
