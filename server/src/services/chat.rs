// server/src/services/chat.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::{AppError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
  pub message: String,
  /// Accepted from clients but not stored anywhere yet.
  pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
  pub message: String,
  pub intent: String,
  pub product_ids: Vec<String>,
}

/// Produces the assistant's reply to one chat message.
#[async_trait]
pub trait ChatResponder: Send + Sync {
  async fn respond(&self, request: &ChatRequest) -> Result<ChatReply>;
}

/// Answers every message with the same canned recommendation.
#[derive(Debug, Clone)]
pub struct StaticChatResponder {
  reply: ChatReply,
}

impl StaticChatResponder {
  pub fn with_reply(reply: ChatReply) -> Self {
    Self { reply }
  }
}

impl Default for StaticChatResponder {
  fn default() -> Self {
    Self::with_reply(ChatReply {
      message: "I found some great options for you! The Samsung Galaxy S23 Ultra (₹1,24,999) is a premium \
                smartphone with a 200MP camera and S Pen support. The OnePlus 11 5G (₹56,999) offers excellent \
                value with its Snapdragon 8 Gen 2 processor and 100W fast charging. Both phones have great cameras \
                and performance."
        .to_string(),
      intent: "product_search".to_string(),
      product_ids: vec![
        "65f1a2b3c4d5e6f7a8b9c0d1".to_string(),
        "65f1a2b3c4d5e6f7a8b9c0d2".to_string(),
      ],
    })
  }
}

#[async_trait]
impl ChatResponder for StaticChatResponder {
  async fn respond(&self, _request: &ChatRequest) -> Result<ChatReply> {
    Ok(self.reply.clone())
  }
}

/// Validates the incoming message and hands it to `responder`.
#[instrument(name = "chat::handle_chat", skip(responder, message, session_id), fields(session_id = session_id.as_deref().unwrap_or("")))]
pub async fn handle_chat(
  responder: &dyn ChatResponder,
  message: Option<String>,
  session_id: Option<String>,
) -> Result<ChatReply> {
  let message = message
    .filter(|m| !m.trim().is_empty())
    .ok_or_else(|| AppError::Validation("No message provided".to_string()))?;

  let reply = responder.respond(&ChatRequest { message, session_id }).await?;
  info!(intent = %reply.intent, product_count = reply.product_ids.len(), "Chat reply produced.");
  Ok(reply)
}
