mod api_doc;
mod app;
mod config;
mod cors;
mod error;
mod handlers;
mod models;
mod routes;
mod server;

use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("challenge-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let listener = server::bind(&config).await?;

    server::run(listener, server::shutdown_signal()).await
}
