//! Handler logic behind each route, free of actix extractors.
//!
//! Each function takes already-parsed input plus the [`Clock`](crate::clock::Clock)
//! where a timestamp is needed, and returns a model or an [`ApiError`](crate::error::ApiError).
//! The `routes` module turns these into HTTP responses.

pub mod health;
pub mod sum;
pub mod users;
