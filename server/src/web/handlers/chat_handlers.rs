// server/src/web/handlers/chat_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::handle_chat;
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct ChatMessagePayload {
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default)]
  pub session_id: Option<String>,
}

#[instrument(name = "handler::chat_message", skip(app_state, req_payload))]
pub async fn chat_message_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ChatMessagePayload>,
) -> Result<HttpResponse, AppError> {
  let ChatMessagePayload { message, session_id } = req_payload.into_inner();
  let reply = handle_chat(app_state.chat_responder.as_ref(), message, session_id).await?;

  Ok(HttpResponse::Ok().json(reply))
}
