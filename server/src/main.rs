// server/src/main.rs

use std::sync::Arc;

use actix_web::HttpServer;
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use catalog_server::services::{image_search, StaticChatResponder};
use catalog_server::store::{MongoProductStore, ProductStore};
use catalog_server::{web, AppConfig, AppState};

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter) // RUST_LOG override
    .with_span_events(FmtSpan::CLOSE);

  match std::env::var("LOG_FORMAT").as_deref() {
    Ok("json") => builder.json().init(),
    _ => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  init_tracing();
  tracing::info!("Starting catalog server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  let store = MongoProductStore::connect(&app_config)
    .await
    .context("Failed to create the MongoDB client")?;
  store.ping().await.context("MongoDB is not reachable")?;
  tracing::info!("Successfully connected to the database.");

  let image_searcher = image_search::from_config(&app_config).context("Failed to set up image search")?;

  let app_state = AppState::new(
    Arc::new(store),
    image_searcher,
    Arc::new(StaticChatResponder::default()),
  );

  let server_address = app_config.bind_address();
  let allowed_origins = app_config.allowed_origins.clone();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || web::create_app(app_state.clone(), &allowed_origins))
    .bind(&server_address)
    .with_context(|| format!("Failed to bind {}", server_address))?
    .run()
    .await?;

  tracing::info!("Server stopped.");
  Ok(())
}
