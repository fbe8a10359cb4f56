//! Startup orchestration.
//!
//! Any startup error is fatal; the listener is bound last so traffic only
//! arrives once logging and configuration are in place.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Bind the listening socket described by `config`.
pub async fn bind_listener(config: &ListenerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind(&config.bind_address).await
}

/// The line announced once the server is accepting connections.
pub fn startup_message(local_addr: SocketAddr) -> String {
    format!("Server running at http://localhost:{}", local_addr.port())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_message_uses_bound_port() {
        let addr: SocketAddr = "0.0.0.0:3000".parse().unwrap();
        assert_eq!(startup_message(addr), "Server running at http://localhost:3000");
    }

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
        };
        let listener = bind_listener(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
