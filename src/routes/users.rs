use crate::clock::Clock;
use crate::error::{ApiError, ErrorBody};
use crate::handlers::users::{create_user, list_users};
use crate::models::{CreateUserRequest, User};
use actix_web::{HttpResponse, Responder, get, post, web};

/// # User Listing Endpoint
///
/// Returns the two fixed users, `id` 1 then 2. Creating a user never changes this list.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Fixed user listing", body = Vec<User>)
    ),
    tag = "Users"
)]
#[get("/users")]
pub async fn get_users() -> impl Responder {
    HttpResponse::Ok().json(list_users())
}

/// # User Creation Endpoint
///
/// Validates `name` and `email` and echoes them back as user `3` with a `createdAt`
/// timestamp. Nothing is stored.
///
/// ## Responses
/// - **201 Created**: both fields present and non-empty
/// - **400 Bad Request**: a field is absent, `null` or empty, or the body is not valid JSON
///
/// ## Example Request
/// ```json
/// { "name": "Bob", "email": "bob@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User accepted", body = User),
        (status = 400, description = "Name or email missing", body = ErrorBody)
    ),
    tag = "Users"
)]
#[post("/users")]
pub async fn post_user(
    req: web::Json<CreateUserRequest>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, ApiError> {
    let user = create_user(req.into_inner(), clock.get_ref()).inspect_err(|err| {
        tracing::debug!(error = %err, "user creation rejected");
    })?;

    tracing::info!(id = user.id, email = %user.email, "user created");
    Ok(HttpResponse::Created().json(user))
}

/// Registers `GET /users` and `POST /users` (mounted under `/api`).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_users).service(post_user);
}
