// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::get_product;
use crate::state::AppState;

/// `GET {prefix}/{product_id}`, mounted under every product route prefix.
#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = get_product(app_state.store.as_ref(), &product_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "product": product
  })))
}
