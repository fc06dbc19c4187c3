// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Message returned for a well-formed identifier with no matching record.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Debug, Error)]
pub enum AppError {
  /// A required request field is missing, empty, or the body is not valid JSON.
  #[error("{0}")]
  Validation(String),

  /// The product identifier is not a 24-hex-character ObjectId.
  #[error("Invalid product id '{id}': {reason}")]
  InvalidIdentifier { id: String, reason: String },

  #[error("{0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  /// Document-store failure (connection, timeout, undecodable record).
  #[error("{0}")]
  Store(String),

  /// Failure reported by an external image-search or chat delegate.
  #[error("{0}")]
  Delegate(String),

  #[error("{0}")]
  Internal(String),
}

impl AppError {
  pub fn product_not_found() -> Self {
    AppError::NotFound(PRODUCT_NOT_FOUND.to_string())
  }
}

impl From<mongodb::error::Error> for AppError {
  fn from(err: mongodb::error::Error) -> Self {
    AppError::Store(err.to_string())
  }
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
    AppError::Delegate(err.to_string())
  }
}

// Handlers that bubble up anyhow errors land here.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Store(_) | AppError::Delegate(_) | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Rejecting request");
    }
    HttpResponse::build(status).json(json!({
        "success": false,
        "error": self.to_string(),
    }))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
