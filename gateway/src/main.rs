use std::env;

use anyhow::Result;
use tracing_subscriber::prelude::*;

use crate::config::{Config, DEFAULT_LOG_FILTER};

mod config;
mod error;
mod images;
mod routes;
mod upload;

#[tokio::main]
async fn main() -> Result<()> {
  // initialize tracing
  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::new(
      env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    ))
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::debug!("starting menu gateway");

  let config = Config::from_env()?;
  let router = routes::app();

  tracing::info!("listening on http://{}", config.addr);
  axum::Server::try_bind(&config.addr)?
    .serve(router.into_make_service())
    .await?;

  Ok(())
}
