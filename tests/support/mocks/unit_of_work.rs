// tests/support/mocks/unit_of_work.rs
use async_trait::async_trait;
use crm_core::domain::{
    audit::{AuditLog, AuditLogWriter, NewAuditLog},
    client::{Client, ClientId, ClientUpdate, ClientWriteRepository, NewClient},
    errors::{DomainError, DomainResult},
    product::{NewProduct, Product, ProductId, ProductUpdate, ProductWriteRepository},
    unit_of_work::{UnitOfWork, UnitOfWorkFactory},
};
use std::sync::Arc;

/// Delegates to a real factory but every audit append fails.
pub struct FailingAuditUnitOfWorkFactory {
    inner: Arc<dyn UnitOfWorkFactory>,
}

impl FailingAuditUnitOfWorkFactory {
    pub fn new(inner: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl UnitOfWorkFactory for FailingAuditUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let inner = self.inner.begin().await?;
        Ok(Box::new(FailingAuditUnitOfWork { inner }))
    }
}

struct FailingAuditUnitOfWork {
    inner: Box<dyn UnitOfWork>,
}

#[async_trait]
impl ClientWriteRepository for FailingAuditUnitOfWork {
    async fn lock_client(&mut self, id: ClientId) -> DomainResult<Option<Client>> {
        self.inner.lock_client(id).await
    }

    async fn insert_client(&mut self, client: NewClient) -> DomainResult<Client> {
        self.inner.insert_client(client).await
    }

    async fn update_client(&mut self, update: ClientUpdate) -> DomainResult<Client> {
        self.inner.update_client(update).await
    }

    async fn delete_client(&mut self, id: ClientId) -> DomainResult<()> {
        self.inner.delete_client(id).await
    }
}

#[async_trait]
impl ProductWriteRepository for FailingAuditUnitOfWork {
    async fn lock_product(&mut self, id: ProductId) -> DomainResult<Option<Product>> {
        self.inner.lock_product(id).await
    }

    async fn insert_product(&mut self, product: NewProduct) -> DomainResult<Product> {
        self.inner.insert_product(product).await
    }

    async fn update_product(&mut self, update: ProductUpdate) -> DomainResult<Product> {
        self.inner.update_product(update).await
    }

    async fn delete_product(&mut self, id: ProductId) -> DomainResult<()> {
        self.inner.delete_product(id).await
    }

    async fn count_products_for_client(&mut self, client_id: ClientId) -> DomainResult<u64> {
        self.inner.count_products_for_client(client_id).await
    }
}

#[async_trait]
impl AuditLogWriter for FailingAuditUnitOfWork {
    async fn append_audit(&mut self, _entry: NewAuditLog) -> DomainResult<AuditLog> {
        Err(DomainError::Persistence("audit table unavailable".into()))
    }
}

#[async_trait]
impl UnitOfWork for FailingAuditUnitOfWork {
    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.inner.commit().await
    }
}
