// server/src/services/catalog.rs

//! Product lookup and response shaping.

use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{ProductId, ProductView};
use crate::store::ProductStore;

/// Resolves a raw identifier to a [`ProductView`].
///
/// A string that is not a 24-hex ObjectId yields [`AppError::InvalidIdentifier`] without
/// touching the store. A well-formed id with no record yields [`AppError::NotFound`].
/// Store failures propagate unchanged.
#[instrument(name = "catalog::get_product", skip(store))]
pub async fn get_product(store: &dyn ProductStore, raw_id: &str) -> Result<ProductView> {
  let id = ProductId::parse(raw_id)?;

  match store.find_by_id(&id).await? {
    Some(product) => {
      info!(product_id = %id, "Product fetched successfully.");
      Ok(ProductView::from(product))
    }
    None => {
      warn!(product_id = %id, "Product not found.");
      Err(AppError::product_not_found())
    }
  }
}
