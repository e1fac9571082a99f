use std::future::Future;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::app::build_router;
use crate::config::Config;

/// Bind the listener for the configured address.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.socket_addr();
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight connections are drained before this returns.
pub async fn run<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated with an error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
