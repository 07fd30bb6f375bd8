/// Portfolio - the backend for a single-page personal portfolio site.
///
/// The server has two jobs besides optionally serving the built frontend:
/// 1. List the owner's most recently updated GitHub repositories, reshaped
///    into the summary format the Projects section renders
/// 2. Accept contact-form submissions and keep them for later reading
///
/// # Architecture
///
/// The system uses:
/// - axum for routing and request extraction
/// - reqwest for the upstream GitHub REST API
/// - An in-memory store behind the [`storage::Storage`] trait
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use portfolio::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     portfolio::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     portfolio::server::start_server(config).await?;
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod github;
pub mod server;
pub mod storage;

/// Configure structured logging with JSON format.
///
/// This function sets up tracing-subscriber with a JSON formatter and an
/// `EnvFilter` read from `RUST_LOG` (defaulting to `info`). Calling it again
/// after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging before starting the server
/// portfolio::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::{EnvFilter, prelude::*};
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
