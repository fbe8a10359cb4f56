//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use redirect_server::config::ServerConfig;
use redirect_server::http::HttpServer;
use redirect_server::lifecycle::Shutdown;
use tokio::task::JoinHandle;

/// A server running on a background task.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Bind `addr` and start the server with default settings.
///
/// Connections made before the serve loop is polled wait in the listen backlog.
pub async fn start_server(addr: SocketAddr) -> RunningServer {
    let mut config = ServerConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that neither pools connections nor honours proxy env vars.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
