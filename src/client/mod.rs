pub mod relay_api;
pub mod session;
pub mod ui;

pub use relay_api::{ HttpRelayClient, RelayApi };
pub use session::{ ChatSession, DisplayTurn, SendOutcome };

use crate::cli::ClientArgs;
use crate::server::shutdown_signal;
use log::{ info, error };
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: ClientArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let relay = HttpRelayClient::new(&args.relay_url, args.relay_timeout())?;
    info!("Relay endpoint: {}", relay.chat_url());

    let app = ui::router(Arc::new(relay));
    let addr = args.ui_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!("Failed to bind chat client to {}: {}", addr, e);
        e
    })?;

    info!("Launching chat interface on http://{}", listener.local_addr()?);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
