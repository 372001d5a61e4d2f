pub mod cli;
pub mod client;
pub mod error;
pub mod llm;
pub mod models;
pub mod relay;
pub mod server;

use cli::RelayArgs;
use log::info;
use relay::RelayService;
use server::Server;
use std::error::Error;

pub async fn run(args: RelayArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Relay Configuration ---");
    info!("Server Address: {}", args.server_addr());
    info!("Chat Model: {}", args.groq_model);
    info!("Chat Base URL: {}", args.groq_base_url);
    info!("API Key Provided: {}", !args.groq_api_key.trim().is_empty());
    info!("Max Tokens: {}", args.max_tokens);
    info!("Temperature: {}", args.temperature);
    info!("Completion Timeout: {}s", args.groq_timeout_secs);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("---------------------------");

    let relay = RelayService::from_config(&args.llm_config());
    let addr = args.server_addr();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, relay, args);
    server.run().await?;

    Ok(())
}
