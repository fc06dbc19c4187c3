// server/src/services/image_search.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::ProductSummary;

/// Finds catalog products that look like the supplied image.
#[async_trait]
pub trait ImageSearcher: Send + Sync {
  /// `image_data` is the encoded image exactly as the client sent it.
  async fn search(&self, image_data: &str) -> Result<Vec<ProductSummary>>;
}

/// Builds the searcher selected by configuration.
pub fn from_config(config: &AppConfig) -> Result<Arc<dyn ImageSearcher>> {
  match &config.image_search_url {
    Some(url) => Ok(Arc::new(HttpImageSearcher::new(url.clone(), config.image_search_timeout)?)),
    None => Ok(Arc::new(UnconfiguredImageSearcher)),
  }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
  image_data: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResponse {
  Wrapped { products: Vec<ProductSummary> },
  Bare(Vec<ProductSummary>),
}

/// Forwards the image to an external similarity service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpImageSearcher {
  endpoint: String,
  client: Client,
}

impl HttpImageSearcher {
  pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
    if endpoint.is_empty() {
      return Err(AppError::Config("Image search endpoint cannot be empty".to_string()));
    }
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;
    Ok(Self { endpoint, client })
  }
}

#[async_trait]
impl ImageSearcher for HttpImageSearcher {
  #[instrument(name = "image_search::http", skip(self, image_data), fields(endpoint = %self.endpoint, payload_len = image_data.len()))]
  async fn search(&self, image_data: &str) -> Result<Vec<ProductSummary>> {
    let response = self
      .client
      .post(&self.endpoint)
      .json(&SearchRequest { image_data })
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = match response.text().await {
        Ok(body) => body,
        Err(e) => format!("<unreadable body: {}>", e),
      };
      error!(status = status.as_u16(), "Image search service returned an error.");
      return Err(AppError::Delegate(format!(
        "Image search service responded with {}: {}",
        status, body
      )));
    }

    let products = match response.json::<SearchResponse>().await? {
      SearchResponse::Wrapped { products } | SearchResponse::Bare(products) => products,
    };
    debug!(results = products.len(), "Image search service answered.");
    Ok(products)
  }
}

/// Used when no similarity service is configured; every search fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredImageSearcher;

#[async_trait]
impl ImageSearcher for UnconfiguredImageSearcher {
  async fn search(&self, _image_data: &str) -> Result<Vec<ProductSummary>> {
    Err(AppError::Delegate("Image search backend is not configured".to_string()))
  }
}

/// Rejects an absent or blank payload, otherwise delegates to `searcher`.
#[instrument(name = "image_search::search_by_image", skip(searcher, image_data))]
pub async fn search_by_image(searcher: &dyn ImageSearcher, image_data: Option<&str>) -> Result<Vec<ProductSummary>> {
  let image_data = image_data
    .filter(|d| !d.trim().is_empty())
    .ok_or_else(|| AppError::Validation("No image data provided".to_string()))?;

  let products = searcher.search(image_data).await?;
  info!(results = products.len(), "Image search completed.");
  Ok(products)
}
