// server/src/web/mod.rs

pub mod cors;
pub mod handlers;
pub mod routes;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web as actix_data, App};

use crate::state::AppState;

pub use routes::configure_app_routes;

/// The complete application: shared state, CORS, request tracing and the route table.
pub fn create_app(
  app_state: AppState,
  allowed_origins: &[String],
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(actix_data::Data::new(app_state))
    .configure(configure_app_routes)
    .default_service(actix_data::to(routes::route_not_found_handler))
    .wrap(cors::storefront_cors(allowed_origins))
    .wrap(tracing_actix_web::TracingLogger::default())
}
