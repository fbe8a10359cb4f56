use std::sync::Arc;

use redirect_server::config::ServerConfig;
use redirect_server::http::{HttpServer, REDIRECT_PATH, REDIRECT_URL};
use redirect_server::lifecycle::{self, Shutdown};
use redirect_server::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::default();

    observability::init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        path = REDIRECT_PATH,
        url = REDIRECT_URL,
        "redirect-server starting"
    );

    let listener = lifecycle::bind_listener(&config.listener).await?;
    let local_addr = listener.local_addr()?;

    let shutdown = Arc::new(Shutdown::new());
    lifecycle::spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tracing::info!("{}", lifecycle::startup_message(local_addr));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
