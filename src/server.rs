use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{error, info};

use crate::{
    api::{self, AppState},
    core::config::AppConfig,
    github::GitHubClient,
    storage::MemStorage,
};

/// Wires the default dependencies into an [`AppState`].
///
/// # Errors
///
/// Returns an error if the GitHub HTTP client cannot be built.
pub fn build_state(config: AppConfig) -> anyhow::Result<AppState> {
    let github = GitHubClient::new(&config).context("building GitHub client")?;
    Ok(AppState::new(
        config,
        Arc::new(MemStorage::new()),
        Arc::new(github),
    ))
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    info!("Initializing state...");
    let address = SocketAddr::new(config.host, config.port);
    let state = build_state(config)?;

    info!(
        github_username = %state.config.github_username,
        cache_repositories = state.config.cache_repositories,
        "Starting server..."
    );
    let app = api::router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
