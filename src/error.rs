use thiserror::Error;

/// Failures of the completion-API adapter, at construction or per call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GROQ_API_KEY is required")]
    MissingApiKey,
    #[error("Invalid API key format: {0}")]
    InvalidApiKey(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Groq API returned {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },
    #[error("Failed to decode Groq response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No response from Groq API")]
    EmptyResponse,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("Groq client not available")]
    Unavailable,
}

/// Failures seen by the interactive client when talking to the relay.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid relay url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    Connection(reqwest::Error),
    #[error("relay returned status {0}")]
    Status(u16),
    #[error("{0}")]
    Decode(String),
}
