// src/infrastructure/repositories/postgres_unit_of_work.rs
use super::{
    map_sqlx,
    postgres_audit_log::{AUDIT_COLUMNS, AuditLogRow},
    postgres_client::{CLIENT_COLUMNS, ClientRow},
    postgres_product::{PRODUCT_COLUMNS, ProductRow},
};
use crate::domain::audit::{AuditLog, AuditLogWriter, NewAuditLog};
use crate::domain::client::{Client, ClientId, ClientUpdate, ClientWriteRepository, NewClient};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    NewProduct, Product, ProductId, ProductUpdate, ProductWriteRepository,
};
use crate::domain::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

#[derive(Clone)]
pub struct PostgresUnitOfWorkFactory {
    pool: PgPool,
}

impl PostgresUnitOfWorkFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PostgresUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresUnitOfWork { tx }))
    }
}

/// A database transaction; rolled back by sqlx when dropped uncommitted.
pub struct PostgresUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ClientWriteRepository for PostgresUnitOfWork {
    async fn lock_client(&mut self, id: ClientId) -> DomainResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1 FOR UPDATE"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Client::try_from).transpose()
    }

    async fn insert_client(&mut self, client: NewClient) -> DomainResult<Client> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            "INSERT INTO clients (full_name, phone, sex, is_active, created_at, created_by_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CLIENT_COLUMNS}"
        ))
        .bind(client.full_name.as_str())
        .bind(client.phone.as_str())
        .bind(client.sex.as_str())
        .bind(client.is_active)
        .bind(client.created_at)
        .bind(i64::from(client.created_by))
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Client::try_from(row)
    }

    async fn update_client(&mut self, update: ClientUpdate) -> DomainResult<Client> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            "UPDATE clients SET
                full_name = COALESCE($2, full_name),
                phone = COALESCE($3, phone),
                sex = COALESCE($4, sex),
                is_active = COALESCE($5, is_active)
             WHERE id = $1
             RETURNING {CLIENT_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.full_name.as_ref().map(|v| v.as_str()))
        .bind(update.phone.as_ref().map(|v| v.as_str()))
        .bind(update.sex.map(|v| v.as_str()))
        .bind(update.is_active)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found(format!("client with id {} not found", update.id)))?;

        Client::try_from(row)
    }

    async fn delete_client(&mut self, id: ClientId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(|err| match map_sqlx(err) {
                // The product foreign key fires here when the client still owns products.
                DomainError::NotFound(_) => {
                    DomainError::conflict(format!("client with id {id} still has products"))
                }
                other => other,
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("client with id {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductWriteRepository for PostgresUnitOfWork {
    async fn lock_product(&mut self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn insert_product(&mut self, product: NewProduct) -> DomainResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "INSERT INTO products (name, status, created_at, client_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(product.name.as_str())
        .bind(product.status.as_str())
        .bind(product.created_at)
        .bind(i64::from(product.client_id))
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update_product(&mut self, update: ProductUpdate) -> DomainResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                status = COALESCE($3, status)
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.name.as_ref().map(|v| v.as_str()))
        .bind(update.status.map(|v| v.as_str()))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found(format!("product with id {} not found", update.id)))?;

        Product::try_from(row)
    }

    async fn delete_product(&mut self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("product with id {id} not found")));
        }
        Ok(())
    }

    async fn count_products_for_client(&mut self, client_id: ClientId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM products WHERE client_id = $1")
            .bind(i64::from(client_id))
            .fetch_one(&mut *self.tx)
            .await
            .map(|count| u64::try_from(count).unwrap_or(0))
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl AuditLogWriter for PostgresUnitOfWork {
    async fn append_audit(&mut self, entry: NewAuditLog) -> DomainResult<AuditLog> {
        let row = sqlx::query_as::<_, AuditLogRow>(&format!(
            "INSERT INTO audit_logs (logged_at, action, user_id, target_model, target_id, changes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {AUDIT_COLUMNS}"
        ))
        .bind(entry.timestamp)
        .bind(entry.action.as_str())
        .bind(i64::from(entry.user_id))
        .bind(entry.target.as_str())
        .bind(entry.target_id)
        .bind(entry.changes.into_json())
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        AuditLog::try_from(row)
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.tx.commit().await.map_err(map_sqlx)
    }
}
