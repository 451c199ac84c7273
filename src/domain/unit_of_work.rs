// src/domain/unit_of_work.rs
use crate::domain::audit::AuditLogWriter;
use crate::domain::client::ClientWriteRepository;
use crate::domain::errors::DomainResult;
use crate::domain::product::ProductWriteRepository;
use async_trait::async_trait;

/// One transaction spanning entity writes and their audit records.
///
/// Nothing is visible to other units of work until [`UnitOfWork::commit`]
/// succeeds; dropping an uncommitted unit of work discards every write.
#[async_trait]
pub trait UnitOfWork: ClientWriteRepository + ProductWriteRepository + AuditLogWriter {
    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}
