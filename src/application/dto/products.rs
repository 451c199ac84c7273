use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::product::{Product, ProductStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub client_id: i64,
}

impl ProductDto {
    pub fn snapshot(&self) -> ApplicationResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|err| {
            ApplicationError::internal(format!("failed to serialize audit snapshot: {err}"))
        })
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            status: product.status,
            created_at: product.created_at,
            client_id: product.client_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn snapshot_uses_wire_status_names() {
        let dto = ProductDto {
            id: 3,
            name: "Widget".into(),
            status: ProductStatus::OutOfStock,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            client_id: 7,
        };

        let snapshot = dto.snapshot().unwrap();
        assert_eq!(snapshot["status"], "out_of_stock");
        assert_eq!(snapshot["client_id"], 7);
    }
}
