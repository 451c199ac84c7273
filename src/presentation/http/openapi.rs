// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::login_access_token,
        crate::presentation::http::controllers::users::read_current_user,
        crate::presentation::http::controllers::clients::create_client,
        crate::presentation::http::controllers::clients::list_clients,
        crate::presentation::http::controllers::clients::get_client,
        crate::presentation::http::controllers::clients::update_client,
        crate::presentation::http::controllers::clients::delete_client,
        crate::presentation::http::controllers::clients::toggle_client_active,
        crate::presentation::http::controllers::products::create_product,
        crate::presentation::http::controllers::products::list_products,
        crate::presentation::http::controllers::products::get_product,
        crate::presentation::http::controllers::products::update_product,
        crate::presentation::http::controllers::products::delete_product,
        crate::presentation::http::controllers::audit::list_audit_logs,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginForm,
            crate::presentation::http::controllers::clients::CreateClientRequest,
            crate::presentation::http::controllers::clients::UpdateClientRequest,
            crate::presentation::http::controllers::products::CreateProductRequest,
            crate::presentation::http::controllers::products::UpdateProductRequest,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::UserDto,
            crate::application::dto::ClientDto,
            crate::application::dto::ProductDto,
            crate::application::dto::AuditLogDto,
            crate::domain::user::Role,
            crate::domain::client::ClientSex,
            crate::domain::product::ProductStatus,
            crate::domain::audit::AuditAction
        )
    ),
    tags(
        (name = "Auth", description = "Token issuance"),
        (name = "Users", description = "Current user"),
        (name = "Clients", description = "Client management"),
        (name = "Products", description = "Product management"),
        (name = "Audit", description = "Audit trail"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "CRM API",
        description = "CRM backend with an audited mutation pipeline",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/login/token",
            "/api/v1/users/me",
            "/api/v1/clients",
            "/api/v1/clients/{id}",
            "/api/v1/clients/{id}/toggle_active",
            "/api/v1/products",
            "/api/v1/products/{id}",
            "/api/v1/audit",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
