use crate::application::dto::UserDto;
use crate::presentation::http::extractors::Authenticated;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "The authenticated user.", body = UserDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn read_current_user(Authenticated(user): Authenticated) -> Json<UserDto> {
    Json(UserDto::from(&user))
}
