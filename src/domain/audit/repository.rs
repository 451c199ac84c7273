use crate::domain::audit::entity::{AuditLog, AuditLogRecord, NewAuditLog};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

/// Appends inside the caller's transaction.
#[async_trait]
pub trait AuditLogWriter: Send {
    async fn append_audit(&mut self, entry: NewAuditLog) -> DomainResult<AuditLog>;
}

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Newest first, ties broken by id descending.
    async fn list(&self, page: PageRequest) -> DomainResult<Vec<AuditLogRecord>>;
}
