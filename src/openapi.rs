use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on each route.
/// Served only when `API_DOCS=true`:
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::users::get_users,
        crate::routes::users::post_user,
        crate::routes::sum::get_sum,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::user::User,
            crate::models::user::CreateUserRequest,
            crate::models::sum::SumResponse,
            crate::error::ErrorBody
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Users", description = "Static user listing and validated user creation"),
        (name = "Sum", description = "Integer addition from path parameters")
    ),
    info(
        description = "Demonstration JSON API: health probe, users and integer sum",
        title = "Demo API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
