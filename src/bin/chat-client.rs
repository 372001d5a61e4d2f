use clap::Parser;
use dotenv::dotenv;
use groq_relay::cli::ClientArgs;
use log::info;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    let args = ClientArgs::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level)).init();

    info!("--- Client Configuration ---");
    info!("Relay URL: {}", args.relay_url);
    info!("Relay Timeout: {}s", args.relay_timeout_secs);
    info!("UI Address: {}", args.ui_addr());
    info!("----------------------------");

    groq_relay::client::run(args).await
}
