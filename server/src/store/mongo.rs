// server/src/store/mongo.rs

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info, instrument};

use super::ProductStore;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{ProductDocument, ProductId};

/// Catalog backed by a MongoDB collection. The driver pools connections internally,
/// so one instance is shared for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct MongoProductStore {
  db: Database,
  products: Collection<ProductDocument>,
}

impl MongoProductStore {
  pub async fn connect(config: &AppConfig) -> Result<Self> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let db = client.database(&config.mongodb_db_name);
    let products = db.collection::<ProductDocument>(&config.products_collection);
    info!(
      db = %config.mongodb_db_name,
      collection = %config.products_collection,
      "MongoDB client created."
    );
    Ok(Self { db, products })
  }
}

#[async_trait]
impl ProductStore for MongoProductStore {
  #[instrument(name = "store::find_by_id", skip(self, id), fields(product_id = %id))]
  async fn find_by_id(&self, id: &ProductId) -> Result<Option<ProductDocument>> {
    let found = self.products.find_one(doc! { "_id": id.as_object_id() }, None).await?;
    debug!(hit = found.is_some(), "Product lookup finished.");
    Ok(found)
  }

  #[instrument(name = "store::ping", skip(self))]
  async fn ping(&self) -> Result<()> {
    self.db.run_command(doc! { "ping": 1 }, None).await?;
    Ok(())
  }
}
