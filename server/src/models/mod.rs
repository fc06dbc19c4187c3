// server/src/models/mod.rs

//! Catalog data as stored and as served.

pub mod product;

pub use product::{Numeric, ProductDocument, ProductId, ProductSummary, ProductView};
