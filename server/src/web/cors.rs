// server/src/web/cors.rs

use actix_cors::Cors;
use actix_web::http::header;

/// CORS policy for the storefront origins. Preflight requests are answered here and
/// never reach a handler. Unlisted origins are not rejected; they just get no
/// `Access-Control-Allow-*` headers, and the browser enforces the rest.
pub fn storefront_cors(allowed_origins: &[String]) -> Cors {
  allowed_origins
    .iter()
    .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
    .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
    .supports_credentials()
    .block_on_origin_mismatch(false)
}
