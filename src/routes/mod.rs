use crate::error::json_error_handler;
use actix_web::web;

/// # Health Check Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
pub mod health;

/// # User Endpoints
///
/// ```text
/// GET  /api/users - fixed two-user listing
/// POST /api/users - validate and echo a new user
/// ```
pub mod users;

/// # Sum Endpoint
///
/// ```text
/// GET /api/sum/{a}/{b}
/// ```
pub mod sum;

/// # Route Configuration
///
/// Mounts the health probe at the root and the remaining endpoints under `/api`.
/// Also installs the JSON body config so decode failures render as `{ "error": ... }`.
///
/// Expects a `web::Data<dyn Clock>` to be registered on the app.
///
/// Anything not listed here falls through to the framework's default 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    health::configure_routes(cfg);
    cfg.service(
        web::scope("/api")
            .configure(users::configure_routes)
            .configure(sum::configure_routes),
    );
}
