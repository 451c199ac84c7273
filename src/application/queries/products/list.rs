use super::ProductQueryService;
use crate::{
    application::{dto::ProductDto, error::ApplicationResult, queries::clients::non_blank},
    domain::{
        client::ClientId,
        pagination::PageRequest,
        product::{ProductFilter, ProductStatus},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery {
    pub skip: u64,
    pub limit: u32,
    pub name: Option<String>,
    pub status: Option<ProductStatus>,
    pub client_id: Option<i64>,
}

impl ProductQueryService {
    pub async fn list_products(&self, query: ListProductsQuery) -> ApplicationResult<Vec<ProductDto>> {
        let filter = ProductFilter {
            name: non_blank(query.name),
            status: query.status,
            client_id: query.client_id.map(ClientId),
        };
        let page = PageRequest::new(query.skip, query.limit);

        let products = self.repo.list(&filter, page).await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }
}
