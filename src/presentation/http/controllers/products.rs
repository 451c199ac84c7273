// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::ProductDto,
    queries::products::ListProductsQuery,
};
use crate::domain::product::ProductStatus;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub status: Option<ProductStatus>,
    pub client_id: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub status: Option<ProductStatus>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u32,
    pub name: Option<String>,
    pub status: Option<ProductStatus>,
    pub client_id: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created.", body = ProductDto),
        (status = 404, description = "Owning client does not exist.", body = ErrorResponse),
        (status = 422, description = "Invalid payload.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let command = CreateProductCommand {
        name: payload.name,
        status: payload.status,
        client_id: payload.client_id,
    };

    state
        .services
        .product_commands
        .create_product(&user, command)
        .await
        .into_http()
        .map(|product| (StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Products ordered by id.", body = [ProductDto])
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    ApiQuery(params): ApiQuery<ProductListParams>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .product_queries
        .list_products(ListProductsQuery {
            skip: params.skip,
            limit: params.limit,
            name: params.name,
            status: params.status,
            client_id: params.client_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product.", body = ProductDto),
        (status = 404, description = "No such product.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product.", body = ProductDto),
        (status = 404, description = "No such product.", body = ErrorResponse),
        (status = 422, description = "Invalid payload.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let command = UpdateProductCommand {
        id,
        name: payload.name,
        status: payload.status,
    };

    state
        .services
        .product_commands
        .update_product(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted."),
        (status = 403, description = "Admin role required.", body = ErrorResponse),
        (status = 404, description = "No such product.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .product_commands
        .delete_product(&user, DeleteProductCommand { id })
        .await
        .into_http()
        .map(|_| StatusCode::NO_CONTENT)
}
