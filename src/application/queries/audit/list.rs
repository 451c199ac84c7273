use super::AuditQueryService;
use crate::{
    application::{
        dto::{AuditLogDto, AuthenticatedUser},
        error::ApplicationResult,
        services::require_admin,
    },
    domain::pagination::PageRequest,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListAuditLogsQuery {
    pub skip: u64,
    pub limit: u32,
}

impl AuditQueryService {
    /// Admin only; newest entries first.
    pub async fn list_audit_logs(
        &self,
        actor: &AuthenticatedUser,
        query: ListAuditLogsQuery,
    ) -> ApplicationResult<Vec<AuditLogDto>> {
        require_admin(actor)?;

        let page = PageRequest::new(query.skip, query.limit);
        let records = self.repo.list(page).await?;
        Ok(records.into_iter().map(AuditLogDto::from).collect())
    }
}
