// src/infrastructure/repositories/postgres_product.rs
use super::{map_sqlx, postgres_client::like_pattern};
use crate::domain::client::ClientId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::product::{
    Product, ProductFilter, ProductId, ProductName, ProductReadRepository, ProductStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

pub(super) const PRODUCT_COLUMNS: &str = "id, name, status, created_at, client_id";

#[derive(Debug, FromRow)]
pub(super) struct ProductRow {
    id: i64,
    name: String,
    status: String,
    created_at: DateTime<Utc>,
    client_id: i64,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            name: ProductName::new(row.name)?,
            status: row.status.parse::<ProductStatus>()?,
            created_at: row.created_at,
            client_id: ClientId::new(row.client_id)?,
        })
    }
}

#[derive(Clone)]
pub struct PostgresProductReadRepository {
    pool: PgPool,
}

impl PostgresProductReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductReadRepository for PostgresProductReadRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn list(&self, filter: &ProductFilter, page: PageRequest) -> DomainResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r"SELECT {PRODUCT_COLUMNS} FROM products
              WHERE ($1::text IS NULL OR name ILIKE $1 ESCAPE '\')
                AND ($2::text IS NULL OR status = $2)
                AND ($3::bigint IS NULL OR client_id = $3)
              ORDER BY id
              OFFSET $4 LIMIT $5"
        ))
        .bind(filter.name.as_deref().map(like_pattern))
        .bind(filter.status.map(|status| status.as_str()))
        .bind(filter.client_id.map(i64::from))
        .bind(page.offset_i64())
        .bind(page.limit_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }
}
