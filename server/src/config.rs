// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Origins the storefront is served from.
pub const ALLOWED_ORIGINS: [&str; 3] = [
  "http://localhost:8080",
  "http://localhost:5173",
  "https://commerce-hub-analytics.vercel.app",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub mongodb_uri: String,
  pub mongodb_db_name: String,
  pub products_collection: String,

  // Unset means image search is unavailable, not a startup failure.
  pub image_search_url: Option<String>,
  pub image_search_timeout: Duration,

  pub allowed_origins: Vec<String>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_optional = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let get_required = |name: &str| {
      get_optional(name).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", name)))
    };

    let mongodb_uri = get_required("MONGODB_URI")?;
    let mongodb_db_name = get_required("MONGODB_DB_NAME")?;
    let products_collection = get_optional("PRODUCTS_COLLECTION").unwrap_or_else(|| "products".to_string());

    let server_host = get_optional("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = get_optional("SERVER_PORT")
      .unwrap_or_else(|| "5000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let image_search_url = get_optional("IMAGE_SEARCH_URL");
    let image_search_timeout = get_optional("IMAGE_SEARCH_TIMEOUT_SECS")
      .unwrap_or_else(|| "30".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid IMAGE_SEARCH_TIMEOUT_SECS: {}", e)))
      .and_then(|secs| match secs {
        0 => Err(AppError::Config("IMAGE_SEARCH_TIMEOUT_SECS must be greater than zero".to_string())),
        secs => Ok(Duration::from_secs(secs)),
      })?;

    tracing::info!(
      db = %mongodb_db_name,
      collection = %products_collection,
      image_search_configured = image_search_url.is_some(),
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      mongodb_uri,
      mongodb_db_name,
      products_collection,
      image_search_url,
      image_search_timeout,
      allowed_origins: ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
