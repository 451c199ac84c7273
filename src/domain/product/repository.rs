use crate::domain::client::ClientId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::product::entity::{NewProduct, Product, ProductFilter, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use async_trait::async_trait;

#[async_trait]
pub trait ProductWriteRepository: Send {
    async fn lock_product(&mut self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn insert_product(&mut self, product: NewProduct) -> DomainResult<Product>;
    async fn update_product(&mut self, update: ProductUpdate) -> DomainResult<Product>;
    async fn delete_product(&mut self, id: ProductId) -> DomainResult<()>;
    async fn count_products_for_client(&mut self, client_id: ClientId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn list(&self, filter: &ProductFilter, page: PageRequest) -> DomainResult<Vec<Product>>;
}
