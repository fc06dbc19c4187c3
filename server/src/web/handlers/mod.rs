// server/src/web/handlers/mod.rs

pub mod chat_handlers;
pub mod image_search_handlers;
pub mod product_handlers;
