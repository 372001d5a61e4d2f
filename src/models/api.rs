use serde::{ Serialize, Deserialize };

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub message: String,
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self { message: "Groq Chatbot API is running!".to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub groq_client: String,
}

impl HealthResponse {
    pub fn new(adapter_available: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            groq_client: (if adapter_available { "connected" } else { "disconnected" }).to_string(),
        }
    }
}

/// Body returned with every non-2xx status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}
