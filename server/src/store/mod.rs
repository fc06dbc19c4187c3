// server/src/store/mod.rs

//! Read-only access to the product catalog.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{ProductDocument, ProductId};

pub use memory::InMemoryProductStore;
pub use mongo::MongoProductStore;

/// Lookup port for the catalog. Implementations must be safe to share across workers.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Exact primary-key lookup. `Ok(None)` means the id is well formed but absent.
  async fn find_by_id(&self, id: &ProductId) -> Result<Option<ProductDocument>>;

  /// Round-trip to the backing store.
  async fn ping(&self) -> Result<()>;
}
