use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::upstream::ListingsClient;
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;
mod upstream;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,suburb_explorer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api_base = %config.api_base, "configuration loaded");

    let client = ListingsClient::new(&config).context("Failed to build upstream client")?;

    tracing::info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    server
        .serve(move |req, _info| match handle(req, &client) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
