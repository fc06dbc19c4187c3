// server/src/state.rs
use std::sync::Arc;

use crate::services::{ChatResponder, ImageSearcher};
use crate::store::ProductStore;

/// Collaborators shared by every worker. Built once in `main`.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
  pub image_searcher: Arc<dyn ImageSearcher>,
  pub chat_responder: Arc<dyn ChatResponder>,
}

impl AppState {
  pub fn new(
    store: Arc<dyn ProductStore>,
    image_searcher: Arc<dyn ImageSearcher>,
    chat_responder: Arc<dyn ChatResponder>,
  ) -> Self {
    Self {
      store,
      image_searcher,
      chat_responder,
    }
  }
}
