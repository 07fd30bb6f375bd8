use anyhow::Context;
use portfolio::core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    portfolio::setup_logging();
    let config = AppConfig::from_env().context("reading configuration")?;
    portfolio::server::start_server(config).await
}
