use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

impl ProductQueryService {
    pub async fn get_product(&self, id: i64) -> ApplicationResult<ProductDto> {
        let not_found = || ApplicationError::not_found(format!("product with id {id} not found"));
        let product_id = ProductId::new(id).map_err(|_| not_found())?;

        self.repo
            .find_by_id(product_id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(not_found)
    }
}
