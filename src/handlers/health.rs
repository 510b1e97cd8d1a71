use crate::clock::Clock;
use crate::models::HealthResponse;

/// Computes the liveness payload. Never fails.
pub fn health_status(clock: &dyn Clock) -> HealthResponse {
    HealthResponse::healthy(clock.now())
}
