// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use catalog_server::config::ALLOWED_ORIGINS;
use catalog_server::models::{Numeric, ProductDocument, ProductSummary};
use catalog_server::services::{ImageSearcher, StaticChatResponder};
use catalog_server::store::InMemoryProductStore;
use catalog_server::{AppError, AppState};
use mongodb::bson::oid::ObjectId;
use once_cell::sync::Lazy;
use tracing::Level;

pub const LAMP_ID: &str = "65f1a2b3c4d5e6f7a8b9c0d1";
pub const HEADPHONES_ID: &str = "65f1a2b3c4d5e6f7a8b9c0d2";
pub const ABSENT_ID: &str = "65f1a2b3c4d5e6f7a8b9c0ff";

/// Only the required fields are stored.
pub fn bare_lamp() -> ProductDocument {
  ProductDocument::new(ObjectId::parse_str(LAMP_ID).unwrap(), "Desk Lamp", 1299_i64, "Home")
}

pub fn full_headphones() -> ProductDocument {
  ProductDocument {
    image_url: Some("https://cdn.example.com/hp.jpg".to_string()),
    images: Some(vec!["https://cdn.example.com/hp-1.jpg".to_string()]),
    description: Some("Over-ear, noise cancelling".to_string()),
    rating: Some(Numeric::Float(4.6)),
    ..ProductDocument::new(ObjectId::parse_str(HEADPHONES_ID).unwrap(), "Headphones", 89.99, "Electronics")
  }
}

pub fn catalog() -> InMemoryProductStore {
  InMemoryProductStore::new([bare_lamp(), full_headphones()])
}

/// Image searcher returning a fixed hit list, or failing with a fixed message.
pub struct FixedImageSearcher {
  pub outcome: Result<Vec<ProductSummary>, String>,
}

#[async_trait]
impl ImageSearcher for FixedImageSearcher {
  async fn search(&self, _image_data: &str) -> catalog_server::Result<Vec<ProductSummary>> {
    self.outcome.clone().map_err(AppError::Delegate)
  }
}

pub fn lamp_summary() -> ProductSummary {
  ProductSummary {
    product_id: LAMP_ID.to_string(),
    name: "Desk Lamp".to_string(),
    price: Numeric::Int(1299),
    category: "Home".to_string(),
    image_url: String::new(),
    score: Some(0.87),
  }
}

pub fn state_with(store: InMemoryProductStore, searcher: FixedImageSearcher) -> AppState {
  AppState::new(Arc::new(store), Arc::new(searcher), Arc::new(StaticChatResponder::default()))
}

pub fn default_state(store: InMemoryProductStore) -> AppState {
  state_with(
    store,
    FixedImageSearcher {
      outcome: Ok(vec![lamp_summary()]),
    },
  )
}

pub fn origins() -> Vec<String> {
  ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
