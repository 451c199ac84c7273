// src/presentation/http/controllers/clients.rs
use crate::application::{
    commands::clients::{
        CreateClientCommand, DeleteClientCommand, SetClientActiveCommand, UpdateClientCommand,
    },
    dto::ClientDto,
    queries::clients::ListClientsQuery,
};
use crate::domain::client::ClientSex;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClientRequest {
    pub full_name: String,
    pub phone: String,
    pub sex: ClientSex,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateClientRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<ClientSex>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u32,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ToggleActiveParams {
    pub is_active: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created.", body = ClientDto),
        (status = 401, description = "Not authenticated.", body = ErrorResponse),
        (status = 409, description = "Phone number already registered.", body = ErrorResponse),
        (status = 422, description = "Invalid payload.", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn create_client(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateClientRequest>,
) -> HttpResult<(StatusCode, Json<ClientDto>)> {
    let command = CreateClientCommand {
        full_name: payload.full_name,
        phone: payload.phone,
        sex: payload.sex,
        is_active: payload.is_active,
    };

    state
        .services
        .client_commands
        .create_client(&user, command)
        .await
        .into_http()
        .map(|client| (StatusCode::CREATED, Json(client)))
}

#[utoipa::path(
    get,
    path = "/api/v1/clients",
    params(ClientListParams),
    responses(
        (status = 200, description = "Clients ordered by id.", body = [ClientDto]),
        (status = 401, description = "Not authenticated.", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn list_clients(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    ApiQuery(params): ApiQuery<ClientListParams>,
) -> HttpResult<Json<Vec<ClientDto>>> {
    state
        .services
        .client_queries
        .list_clients(ListClientsQuery {
            skip: params.skip,
            limit: params.limit,
            full_name: params.full_name,
            phone: params.phone,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "The client.", body = ClientDto),
        (status = 404, description = "No such client.", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn get_client(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<ClientDto>> {
    state
        .services
        .client_queries
        .get_client(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/clients/{id}",
    params(("id" = i64, Path, description = "Client id")),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Updated client.", body = ClientDto),
        (status = 403, description = "Only admins may change `is_active`.", body = ErrorResponse),
        (status = 404, description = "No such client.", body = ErrorResponse),
        (status = 409, description = "Phone number already registered.", body = ErrorResponse),
        (status = 422, description = "Invalid payload.", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn update_client(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateClientRequest>,
) -> HttpResult<Json<ClientDto>> {
    let command = UpdateClientCommand {
        id,
        full_name: payload.full_name,
        phone: payload.phone,
        sex: payload.sex,
        is_active: payload.is_active,
    };

    state
        .services
        .client_commands
        .update_client(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 204, description = "Client deleted."),
        (status = 403, description = "Admin role required.", body = ErrorResponse),
        (status = 404, description = "No such client.", body = ErrorResponse),
        (status = 409, description = "Client still owns products.", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn delete_client(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .client_commands
        .delete_client(&user, DeleteClientCommand { id })
        .await
        .into_http()
        .map(|_| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/v1/clients/{id}/toggle_active",
    params(("id" = i64, Path, description = "Client id"), ToggleActiveParams),
    responses(
        (status = 200, description = "Client with the requested active flag.", body = ClientDto),
        (status = 403, description = "Admin role required.", body = ErrorResponse),
        (status = 404, description = "No such client.", body = ErrorResponse)
    ),
    tag = "Clients"
)]
pub async fn toggle_client_active(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<ToggleActiveParams>,
) -> HttpResult<Json<ClientDto>> {
    state
        .services
        .client_commands
        .set_client_active(
            &user,
            SetClientActiveCommand {
                id,
                is_active: params.is_active,
            },
        )
        .await
        .into_http()
        .map(Json)
}
