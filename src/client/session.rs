use log::{ info, error };
use serde::{ Deserialize, Serialize };

use super::relay_api::RelayApi;
use crate::error::ClientError;
use crate::models::{ ChatRequest, Message };

pub const INITIAL_STATS: &str = "No messages yet";

/// One row of the visible chat log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTurn {
    pub user: String,
    pub reply: String,
    pub is_error: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
    pub history: Vec<DisplayTurn>,
    pub stats: String,
}

/// Session-local conversation state. The transcript only ever holds
/// successful exchanges; failed turns live in the display log alone.
#[derive(Clone, Debug)]
pub struct ChatSession {
    transcript: Vec<Message>,
    display: Vec<DisplayTurn>,
    total_tokens: u64,
    stats: String,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            transcript: Vec::new(),
            display: Vec::new(),
            total_tokens: 0,
            stats: INITIAL_STATS.to_string(),
        }
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn snapshot(&self) -> SendOutcome {
        SendOutcome {
            history: self.display.clone(),
            stats: self.stats.clone(),
        }
    }

    pub async fn send(&mut self, api: &dyn RelayApi, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return self.snapshot();
        }

        info!("Sending message to API: {}...", text.chars().take(50).collect::<String>());
        let req = ChatRequest::new(text, self.transcript.clone());

        match api.chat(&req).await {
            Ok(resp) if resp.success => {
                self.transcript.push(Message::user(text));
                self.transcript.push(Message::assistant(resp.response.clone()));
                self.total_tokens += resp.tokens_used;
                self.display.push(DisplayTurn {
                    user: text.to_string(),
                    reply: resp.response,
                    is_error: false,
                });
                self.stats = format!(
                    "Tokens: {} | Time: {:.2}s | Total Tokens: {}",
                    resp.tokens_used,
                    resp.execution_time,
                    self.total_tokens
                );
                info!("Received response successfully");
            }
            Ok(resp) => {
                error!("Relay reported a failed completion: {}", resp.response);
                self.push_error(text, resp.response, "Error occurred");
            }
            Err(ClientError::Status(code)) => {
                error!("API request failed: {}", code);
                self.push_error(text, format!("API Error: {}", code), "Error occurred");
            }
            Err(ClientError::Connection(e)) => {
                error!("Connection error: {}", e);
                self.push_error(text, format!("Connection Error: {}", e), "Connection error");
            }
            Err(e) => {
                error!("Unexpected error: {}", e);
                self.push_error(text, format!("Unexpected Error: {}", e), "Unexpected error");
            }
        }

        self.snapshot()
    }

    pub fn reset(&mut self) -> SendOutcome {
        self.transcript.clear();
        self.display.clear();
        self.total_tokens = 0;
        self.stats.clear();
        info!("Chat history cleared");
        self.snapshot()
    }

    fn push_error(&mut self, text: &str, marker: String, stats: &str) {
        self.display.push(DisplayTurn {
            user: text.to_string(),
            reply: marker,
            is_error: true,
        });
        self.stats = stats.to_string();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{ ChatResponse, Role };
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays queued results and records the requests it was given.
    pub(crate) struct ScriptedRelay {
        pub replies: Mutex<VecDeque<Result<ChatResponse, ClientError>>>,
        pub requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedRelay {
        pub(crate) fn new(replies: Vec<Result<ChatResponse, ClientError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RelayApi for ScriptedRelay {
        async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse, ClientError> {
            self.requests.lock().unwrap().push(req.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Decode("no scripted reply".to_string())))
        }
    }

    fn ok(text: &str, tokens: u64, secs: f64) -> Result<ChatResponse, ClientError> {
        Ok(ChatResponse::success(text.to_string(), tokens, secs))
    }

    #[tokio::test]
    async fn successful_sends_accumulate_transcript_and_tokens() {
        let relay = ScriptedRelay::new(vec![ok("R1", 10, 0.5), ok("R2", 7, 1.234)]);
        let mut session = ChatSession::new();

        let out = session.send(&relay, "hello").await;
        assert_eq!(session.transcript(), &[Message::user("hello"), Message::assistant("R1")]);
        assert_eq!(out.stats, "Tokens: 10 | Time: 0.50s | Total Tokens: 10");
        assert_eq!(out.history.len(), 1);

        let out = session.send(&relay, "again").await;
        assert_eq!(session.transcript().len(), 4);
        assert_eq!(session.transcript()[3].role, Role::Assistant);
        assert_eq!(session.total_tokens(), 17);
        assert_eq!(out.stats, "Tokens: 7 | Time: 1.23s | Total Tokens: 17");

        let requests = relay.requests.lock().unwrap();
        assert_eq!(requests[0].conversation_history.as_deref(), Some(&[][..]));
        assert_eq!(requests[1].message, "again");
        assert_eq!(requests[1].conversation_history.as_ref().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failures_render_error_marker_and_keep_totals() {
        let relay = ScriptedRelay::new(vec![
            ok("R1", 10, 0.1),
            Ok(ChatResponse::failure("quota exceeded")),
            Err(ClientError::Status(503)),
            Err(ClientError::Decode("bad json".to_string())),
        ]);
        let mut session = ChatSession::new();
        session.send(&relay, "hello").await;

        let out = session.send(&relay, "second").await;
        assert_eq!(out.stats, "Error occurred");
        let last = out.history.last().unwrap();
        assert!(last.is_error);
        assert!(last.reply.contains("quota exceeded"));

        let out = session.send(&relay, "third").await;
        assert_eq!(out.history.last().unwrap().reply, "API Error: 503");

        let out = session.send(&relay, "fourth").await;
        assert_eq!(out.stats, "Unexpected error");
        assert_eq!(out.history.last().unwrap().reply, "Unexpected Error: bad json");

        assert_eq!(out.history.len(), 4);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.total_tokens(), 10);
    }

    #[tokio::test]
    async fn blank_input_makes_no_call() {
        let relay = ScriptedRelay::new(Vec::new());
        let mut session = ChatSession::new();
        let out = session.send(&relay, "  ").await;
        assert!(out.history.is_empty());
        assert_eq!(out.stats, INITIAL_STATS);
        assert!(relay.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let relay = ScriptedRelay::new(vec![ok("R1", 10, 0.1), Err(ClientError::Status(500))]);
        let mut session = ChatSession::new();
        session.send(&relay, "hello").await;
        session.send(&relay, "boom").await;

        let out = session.reset();
        assert!(out.history.is_empty());
        assert_eq!(out.stats, "");
        assert!(session.transcript().is_empty());
        assert_eq!(session.total_tokens(), 0);

        let out = ChatSession::new().reset();
        assert!(out.history.is_empty());
    }
}
