use crate::clock::Clock;
use crate::error::{ApiError, MISSING_USER_FIELDS};
use crate::models::user::CREATED_USER_ID;
use crate::models::{CreateUserRequest, User};

pub fn list_users() -> Vec<User> {
    User::directory()
}

/// Validates the request and echoes it back as user `3`.
///
/// `name` and `email` must both be present and non-empty; otherwise this
/// returns [`ApiError::Validation`] without reading the clock.
pub fn create_user(request: CreateUserRequest, clock: &dyn Clock) -> Result<User, ApiError> {
    let (name, email) = request
        .required_fields()
        .ok_or(ApiError::Validation(MISSING_USER_FIELDS))?;

    Ok(User {
        id: CREATED_USER_ID,
        name,
        email,
        created_at: Some(clock.now()),
    })
}
