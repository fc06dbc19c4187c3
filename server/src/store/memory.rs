// server/src/store/memory.rs

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::ProductStore;
use crate::errors::{AppError, Result};
use crate::models::{ProductDocument, ProductId};

/// Fixed, in-process catalog. Useful for tests and for running the server without a database.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProductStore {
  products: Arc<HashMap<ObjectId, ProductDocument>>,
  failure: Option<String>,
  lookups: Arc<AtomicUsize>,
}

impl InMemoryProductStore {
  pub fn new<I>(products: I) -> Self
  where
    I: IntoIterator<Item = ProductDocument>,
  {
    Self {
      products: Arc::new(products.into_iter().map(|p| (p.id, p)).collect()),
      failure: None,
      lookups: Arc::new(AtomicUsize::new(0)),
    }
  }

  /// A store whose every call fails with `message`, as an unreachable database would.
  pub fn unavailable(message: impl Into<String>) -> Self {
    Self {
      failure: Some(message.into()),
      ..Self::default()
    }
  }

  /// Number of `find_by_id` calls served so far.
  pub fn lookup_count(&self) -> usize {
    self.lookups.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  async fn find_by_id(&self, id: &ProductId) -> Result<Option<ProductDocument>> {
    self.lookups.fetch_add(1, Ordering::SeqCst);
    if let Some(message) = &self.failure {
      return Err(AppError::Store(message.clone()));
    }
    Ok(self.products.get(&id.as_object_id()).cloned())
  }

  async fn ping(&self) -> Result<()> {
    match &self.failure {
      Some(message) => Err(AppError::Store(message.clone())),
      None => Ok(()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn returns_only_exact_matches() {
    let oid = ObjectId::new();
    let store = InMemoryProductStore::new([ProductDocument::new(oid, "Mug", 8_i64, "Home")]);

    let hit = store.find_by_id(&ProductId::from(oid)).await.unwrap();
    assert_eq!(hit.map(|p| p.name), Some("Mug".to_string()));

    let miss = store.find_by_id(&ProductId::from(ObjectId::new())).await.unwrap();
    assert!(miss.is_none());
    assert_eq!(store.lookup_count(), 2);
  }

  #[tokio::test]
  async fn unavailable_store_fails_every_call() {
    let store = InMemoryProductStore::unavailable("server selection timeout");
    let err = store.find_by_id(&ProductId::from(ObjectId::new())).await.unwrap_err();
    assert!(matches!(err, AppError::Store(ref m) if m == "server selection timeout"));
    assert!(store.ping().await.is_err());
  }
}
