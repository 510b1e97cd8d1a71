use crate::error::{ApiError, ErrorBody};
use crate::handlers::sum::sum;
use crate::models::SumResponse;
use actix_web::{HttpResponse, get, web};

#[utoipa::path(
    get,
    path = "/api/sum/{a}/{b}",
    params(
        ("a" = i64, Path, description = "First operand"),
        ("b" = i64, Path, description = "Second operand")
    ),
    responses(
        (status = 200, description = "Sum of both operands", body = SumResponse),
        (status = 400, description = "Operand is not an integer or the sum overflows", body = ErrorBody)
    ),
    tag = "Sum"
)]
#[get("/sum/{a}/{b}")]
pub async fn get_sum(path: web::Path<(String, String)>) -> Result<HttpResponse, ApiError> {
    let (a, b) = path.into_inner();
    let result = sum(&a, &b).inspect_err(|err| {
        tracing::debug!(error = %err, a = %a, b = %b, "sum rejected");
    })?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_sum);
}
