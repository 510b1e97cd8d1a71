use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const MISSING_USER_FIELDS: &str = "Name and email required";

/// # Error Response Body
///
/// Every failing request renders this shape with `Content-Type: application/json`.
///
/// ## Example JSON
/// ```json
/// { "error": "Name and email required" }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Parameter '{name}' must be an integer")]
    InvalidPathParameter { name: &'static str },

    #[error("Sum of a and b is out of range")]
    SumOverflow,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::InvalidPathParameter { .. }
            | ApiError::SumOverflow
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Hooked into `web::JsonConfig` so undecodable bodies share the [`ErrorBody`] shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejecting request body");
    ApiError::InvalidBody(err.to_string()).into()
}
