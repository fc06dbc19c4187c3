// server/src/web/routes.rs

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Route};
use serde_json::json;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::{chat_handlers, image_search_handlers, product_handlers};

/// Prefixes under which the product lookup is mounted. Both serve the same handler.
pub const PRODUCT_ROUTE_PREFIXES: [&str; 2] = ["/api/products", "/products"];

async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  match app_state.store.ping().await {
    Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok" })),
    Err(e) => {
      warn!(error = %e, "Health check failed: store unreachable.");
      HttpResponse::ServiceUnavailable().json(json!({ "status": "unavailable", "error": e.to_string() }))
    }
  }
}

pub async fn route_not_found_handler(req: HttpRequest) -> HttpResponse {
  HttpResponse::NotFound().json(json!({
      "success": false,
      "error": format!("No route for {} {}", req.method(), req.path()),
  }))
}

// Malformed or mistyped bodies are client errors with a JSON body like any other.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| AppError::Validation(format!("Invalid JSON body: {}", err)).into())
}

/// Bare `OPTIONS`, answered without touching state. Real preflights are handled by the CORS layer.
async fn preflight_handler() -> HttpResponse {
  HttpResponse::Ok().finish()
}

async fn method_not_allowed_handler(req: HttpRequest) -> HttpResponse {
  HttpResponse::MethodNotAllowed().json(json!({
      "success": false,
      "error": format!("Method {} not allowed on {}", req.method(), req.path()),
  }))
}

// One CORS-enabled path. Methods without a route get a JSON 405.
fn cors_resource(path: &str, route: Route) -> actix_web::Resource {
  web::resource(path)
    .route(route)
    .route(web::method(Method::OPTIONS).to(preflight_handler))
    .default_service(web::to(method_not_allowed_handler))
}

fn configure_product_routes(cfg: &mut web::ServiceConfig, prefix: &str) {
  cfg.service(cors_resource(
    &format!("{}/{{product_id}}", prefix),
    web::get().to(product_handlers::get_product_handler),
  ));
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .route("/health", web::get().to(health_check_handler))
    .service(cors_resource(
      "/image-search",
      web::post().to(image_search_handlers::image_search_handler),
    ))
    .service(cors_resource(
      "/api/chat/message",
      web::post().to(chat_handlers::chat_message_handler),
    ));

  for prefix in PRODUCT_ROUTE_PREFIXES {
    configure_product_routes(cfg, prefix);
  }
}
