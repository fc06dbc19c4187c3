// server/src/web/handlers/image_search_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::search_by_image;
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct ImageSearchPayload {
  #[serde(default)]
  pub image_data: Option<String>,
}

#[instrument(name = "handler::image_search", skip(app_state, req_payload))]
pub async fn image_search_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ImageSearchPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  let products = search_by_image(app_state.image_searcher.as_ref(), payload.image_data.as_deref()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "products": products
  })))
}
