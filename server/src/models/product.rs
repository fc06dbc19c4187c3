// server/src/models/product.rs

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Primary key of a catalog record: a 12-byte ObjectId, written as 24 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(ObjectId);

impl ProductId {
  pub fn parse(raw: &str) -> Result<Self, AppError> {
    ObjectId::parse_str(raw).map(ProductId).map_err(|e| AppError::InvalidIdentifier {
      id: raw.to_string(),
      reason: e.to_string(),
    })
  }

  pub fn as_object_id(&self) -> ObjectId {
    self.0
  }
}

impl From<ObjectId> for ProductId {
  fn from(oid: ObjectId) -> Self {
    ProductId(oid)
  }
}

impl FromStr for ProductId {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0.to_hex())
  }
}

/// A numeric field as the store holds it. Integers stay integers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
  Int(i64),
  Float(f64),
}

impl Default for Numeric {
  fn default() -> Self {
    Numeric::Int(0)
  }
}

impl From<i64> for Numeric {
  fn from(v: i64) -> Self {
    Numeric::Int(v)
  }
}

impl From<f64> for Numeric {
  fn from(v: f64) -> Self {
    Numeric::Float(v)
  }
}

/// A product record as stored in the `products` collection. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
  #[serde(rename = "_id")]
  pub id: ObjectId,
  pub name: String,
  pub price: Numeric,
  pub category: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub images: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rating: Option<Numeric>,
}

impl ProductDocument {
  /// A record carrying only the required fields.
  pub fn new(id: ObjectId, name: impl Into<String>, price: impl Into<Numeric>, category: impl Into<String>) -> Self {
    Self {
      id,
      name: name.into(),
      price: price.into(),
      category: category.into(),
      image_url: None,
      images: None,
      description: None,
      rating: None,
    }
  }
}

/// API-facing projection of a product, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
  pub product_id: String,
  pub name: String,
  pub price: Numeric,
  pub category: String,
  pub image_url: String,
  pub images: Vec<String>,
  pub description: String,
  pub rating: Numeric,
}

impl From<ProductDocument> for ProductView {
  fn from(doc: ProductDocument) -> Self {
    Self {
      product_id: doc.id.to_hex(),
      name: doc.name,
      price: doc.price,
      category: doc.category,
      image_url: doc.image_url.unwrap_or_default(),
      images: doc.images.unwrap_or_default(),
      description: doc.description.unwrap_or_default(),
      rating: doc.rating.unwrap_or_default(),
    }
  }
}

/// One hit returned by the image-similarity delegate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
  pub product_id: String,
  pub name: String,
  pub price: Numeric,
  pub category: String,
  #[serde(default)]
  pub image_url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub score: Option<f64>,
}
