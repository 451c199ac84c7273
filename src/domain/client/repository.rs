use crate::domain::client::entity::{Client, ClientFilter, ClientUpdate, NewClient};
use crate::domain::client::value_objects::ClientId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

/// Transactional writes; implemented by a unit of work.
#[async_trait]
pub trait ClientWriteRepository: Send {
    /// Loads the client and locks it for the rest of the transaction.
    async fn lock_client(&mut self, id: ClientId) -> DomainResult<Option<Client>>;
    async fn insert_client(&mut self, client: NewClient) -> DomainResult<Client>;
    async fn update_client(&mut self, update: ClientUpdate) -> DomainResult<Client>;
    async fn delete_client(&mut self, id: ClientId) -> DomainResult<()>;
}

#[async_trait]
pub trait ClientReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ClientId) -> DomainResult<Option<Client>>;
    async fn list(&self, filter: &ClientFilter, page: PageRequest) -> DomainResult<Vec<Client>>;
}
