use clap::Parser;
use std::time::Duration;
use crate::llm::{ LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL };

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "HTTP relay between chat clients and the Groq completion API", long_about = None)]
pub struct RelayArgs {
    // --- Completion API Args ---
    /// API key for the Groq completion API. When empty the relay starts degraded.
    #[arg(long, env = "GROQ_API_KEY", default_value = "", hide_env_values = true)]
    pub groq_api_key: String,

    /// Model used for chat completion.
    #[arg(long, env = "GROQ_MODEL", default_value = DEFAULT_MODEL)]
    pub groq_model: String,

    /// Base URL of the OpenAI-compatible completion endpoint.
    #[arg(long, env = "GROQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub groq_base_url: String,

    /// Maximum number of tokens generated per reply.
    #[arg(long, env = "MAX_TOKENS", default_value = "1000")]
    pub max_tokens: u32,

    /// Sampling temperature sent with every completion request.
    #[arg(long, env = "TEMPERATURE", default_value = "0.7")]
    pub temperature: f32,

    /// Seconds to wait on the completion API before the call is treated as failed.
    #[arg(long, env = "GROQ_TIMEOUT_SECS", default_value = "60")]
    pub groq_timeout_secs: u64,

    // --- Server Args ---
    /// Host address the relay binds to.
    #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
    pub api_host: String,

    /// Port the relay listens on.
    #[arg(long, env = "API_PORT", default_value = "8000")]
    pub api_port: u16,

    /// Path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    /// Default log filter (overridden by RUST_LOG).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl RelayArgs {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            api_key: Some(self.groq_api_key.clone()).filter(|k| !k.trim().is_empty()),
            model: self.groq_model.clone(),
            base_url: self.groq_base_url.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            timeout: Duration::from_secs(self.groq_timeout_secs),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Browser chat client for the Groq relay", long_about = None)]
pub struct ClientArgs {
    /// Base URL of the relay service.
    #[arg(long, env = "RELAY_URL", default_value = "http://localhost:8000")]
    pub relay_url: String,

    /// Seconds before a relay call is abandoned and shown as a connection error.
    #[arg(long, env = "RELAY_TIMEOUT_SECS", default_value = "30")]
    pub relay_timeout_secs: u64,

    /// Host address the chat page is served on.
    #[arg(long, env = "UI_HOST", default_value = "0.0.0.0")]
    pub ui_host: String,

    #[arg(long, env = "UI_PORT", default_value = "7860")]
    pub ui_port: u16,

    /// Default log filter (overridden by RUST_LOG).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ClientArgs {
    pub fn ui_addr(&self) -> String {
        format!("{}:{}", self.ui_host, self.ui_port)
    }

    pub fn relay_timeout(&self) -> Duration {
        Duration::from_secs(self.relay_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_defaults_cover_budget_and_port() {
        let args = RelayArgs::try_parse_from(["groq-relay", "--groq-api-key", ""]).unwrap();
        assert_eq!(args.api_port, 8000);
        assert_eq!(args.groq_model, DEFAULT_MODEL);

        let config = args.llm_config();
        assert!(config.api_key.is_none());
        assert_eq!(config.max_tokens, 1000);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn client_flags_override_defaults() {
        let args = ClientArgs::try_parse_from([
            "chat-client",
            "--relay-url",
            "http://relay:9000",
            "--ui-port",
            "9999",
        ]).unwrap();
        assert_eq!(args.relay_url, "http://relay:9000");
        assert_eq!(args.ui_addr(), format!("{}:9999", args.ui_host));
    }
}
