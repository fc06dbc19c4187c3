// server/src/services/mod.rs

//! Request-scoped operations behind the HTTP handlers.

pub mod catalog;
pub mod chat;
pub mod image_search;

pub use catalog::get_product;
pub use chat::{handle_chat, ChatReply, ChatRequest, ChatResponder, StaticChatResponder};
pub use image_search::{search_by_image, HttpImageSearcher, ImageSearcher, UnconfiguredImageSearcher};
