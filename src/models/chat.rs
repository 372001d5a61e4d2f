use serde::{ Serialize, Deserialize };
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        write!(f, "{}", name)
    }
}

/// A single conversation turn. Order inside a transcript is chronological.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Option<Vec<Message>>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, history: Vec<Message>) -> Self {
        Self {
            message: message.into(),
            conversation_history: Some(history),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub tokens_used: u64,
    /// Wall-clock seconds spent waiting on the completion API.
    pub execution_time: f64,
    pub success: bool,
}

impl ChatResponse {
    pub fn success(response: String, tokens_used: u64, execution_time: f64) -> Self {
        Self {
            response,
            tokens_used,
            execution_time,
            success: true,
        }
    }

    /// Failure shape: elapsed time is reported as zero, not time-to-failure.
    pub fn failure(cause: impl fmt::Display) -> Self {
        Self {
            response: format!("Sorry, I encountered an error: {}", cause),
            tokens_used: 0,
            execution_time: 0.0,
            success: false,
        }
    }
}
