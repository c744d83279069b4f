//! Tilerace HTTP listener.
//!
//! [`start_server`] binds the configured `server.host`/`server.port`,
//! serves the game API over the shared [`AppState`], and on `Ctrl-C`
//! stops accepting connections. A roll already holding the session lock
//! runs to completion, including its autosave, before the process exits.

use std::net::SocketAddr;
use std::sync::Arc;

use tilerace_core::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::router::build_router;
use crate::state::AppState;

/// Errors that can occur when starting or running the game server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `server.host` and `server.port` do not form a socket address.
    #[error("invalid listen address {addr}: {source}")]
    InvalidAddress {
        /// The rejected `host:port` string.
        addr: String,
        /// The parse failure.
        source: std::net::AddrParseError,
    },

    /// The port is taken or the host is not local.
    #[error("cannot bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: SocketAddr,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The accept loop failed after startup.
    #[error("server stopped unexpectedly: {source}")]
    Serve {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Resolve `server.host`/`server.port` into a socket address.
///
/// # Errors
///
/// Returns [`ServerError::InvalidAddress`] if the host is not an IP literal.
pub fn listen_addr(config: &ServerConfig) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", config.host, config.port);
    addr.parse()
        .map_err(|source| ServerError::InvalidAddress { addr, source })
}

/// Serve the game until `Ctrl-C`.
///
/// # Errors
///
/// Returns [`ServerError`] if the address is invalid, the port cannot be
/// bound, or the accept loop fails.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = listen_addr(config)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, "Tilerace server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServerError::Serve { source })?;

    info!("Tilerace server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, finishing in-flight rolls"),
        Err(e) => {
            error!(error = %e, "Cannot listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
