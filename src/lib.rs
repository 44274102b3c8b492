//! Dating Mock API - canned JSON backend for the dating app client
//!
//! Serves fixed user, match, chat, trust score and heart temperature payloads
//! behind an origin allow-list. Nothing is stored between requests.

pub mod config;
pub mod core;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{from_fn, NormalizePath},
    web, App,
};

// Re-export commonly used types
pub use config::Settings;
pub use error::ApiError;
pub use middleware::OriginGate;
pub use routes::{render_banner, ROUTE_TABLE};

/// Largest request body accepted, matching express.json's default of 100kb
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Build the application: origin gate, CORS headers, request log, routes and
/// the not-found fallback
pub fn build_app(
    gate: OriginGate,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = middleware::cors(&gate);

    App::new()
        .app_data(web::Data::new(gate))
        .app_data(web::PayloadConfig::new(BODY_LIMIT_BYTES))
        .wrap(NormalizePath::trim())
        .wrap(from_fn(middleware::log_request))
        .wrap(cors)
        .wrap(from_fn(middleware::check_origin))
        .configure(routes::configure_routes)
        .default_service(web::to(routes::not_found))
}
