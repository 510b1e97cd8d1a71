/// # Health Status Response
///
/// Liveness payload returned by `GET /health`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// User records and the creation request body.
pub mod user;

/// Response of the integer sum endpoint.
pub mod sum;

pub use health::HealthResponse;
pub use sum::SumResponse;
pub use user::{CreateUserRequest, User};
