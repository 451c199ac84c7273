// src/presentation/http/controllers/auth.rs
use crate::application::{commands::auth::LoginCommand, dto::AuthTokenDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiForm;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// OAuth2 password grant form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/login/token",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued.", body = AuthTokenDto),
        (status = 401, description = "Incorrect username or password.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Malformed form.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login_access_token(
    Extension(state): Extension<HttpState>,
    ApiForm(form): ApiForm<LoginForm>,
) -> HttpResult<Json<AuthTokenDto>> {
    let token = state
        .services
        .auth_commands
        .login(LoginCommand {
            login: form.username,
            password: form.password,
        })
        .await
        .into_http()?;

    Ok(Json(token))
}
