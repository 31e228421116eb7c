//! HTTP server lifecycle.
//!
//! [`start_server`] binds the listener and serves the router until
//! `Ctrl-C` is received.

use std::net::SocketAddr;

use pokerun_roster::RosterStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerSection;
use crate::router::build_router;
use crate::state::AppState;

/// Start the HTTP server and run until shutdown.
///
/// # Errors
///
/// Returns an error if the address is invalid, the listener cannot bind,
/// or the server hits a fatal I/O error.
pub async fn start_server<S: RosterStore>(
    config: &ServerSection,
    state: AppState<S>,
) -> Result<(), ServerError> {
    let raw = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = raw
        .parse()
        .map_err(|e: std::net::AddrParseError| ServerError::Address(format!("{raw} ({e})")))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "Pokerun server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Pokerun server stopped");
    Ok(())
}

/// Resolves on `Ctrl-C`. If the signal handler cannot be installed the
/// server runs until killed.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Errors from [`start_server`].
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `host:port` is not a socket address.
    #[error("invalid listen address: {0}")]
    Address(String),

    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was tried.
        addr: SocketAddr,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Serving stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
