use clap::Parser;
use dotenv::dotenv;
use groq_relay::cli::RelayArgs;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    let args = RelayArgs::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level)).init();

    groq_relay::run(args).await
}
