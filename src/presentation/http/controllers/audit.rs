use crate::application::{dto::AuditLogDto, queries::audit::ListAuditLogsQuery};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiQuery, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u32,
}

#[utoipa::path(
    get,
    path = "/api/v1/audit",
    params(AuditListParams),
    responses(
        (status = 200, description = "Audit entries, newest first.", body = [AuditLogDto]),
        (status = 403, description = "Admin role required.", body = ErrorResponse)
    ),
    tag = "Audit"
)]
pub async fn list_audit_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    ApiQuery(params): ApiQuery<AuditListParams>,
) -> HttpResult<Json<Vec<AuditLogDto>>> {
    state
        .services
        .audit_queries
        .list_audit_logs(
            &actor,
            ListAuditLogsQuery {
                skip: params.skip,
                limit: params.limit,
            },
        )
        .await
        .into_http()
        .map(Json)
}
