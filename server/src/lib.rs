// server/src/lib.rs

//! HTTP front for the product catalog: product lookup, image search and the
//! shopping-assistant chat endpoint.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
