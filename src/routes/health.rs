use crate::clock::Clock;
use crate::handlers::health::health_status;
use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns `status: "healthy"` and the current time. Never fails.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(clock: web::Data<dyn Clock>) -> impl Responder {
    HttpResponse::Ok().json(health_status(clock.get_ref()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
