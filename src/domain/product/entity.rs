// src/domain/product/entity.rs
use crate::domain::client::ClientId;
use crate::domain::client::entity::contains_ci;
use crate::domain::product::value_objects::{ProductId, ProductName, ProductStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub client_id: ClientId,
}

impl Product {
    pub fn apply(&mut self, update: &ProductUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub client_id: ClientId,
}

/// The owning client is fixed at creation; only name and status change.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: Option<ProductName>,
    pub status: Option<ProductStatus>,
}

impl ProductUpdate {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            status: None,
        }
    }

    pub fn with_name(mut self, name: ProductName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub status: Option<ProductStatus>,
    pub client_id: Option<ClientId>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        contains_ci(product.name.as_str(), self.name.as_deref())
            && self.status.is_none_or(|status| product.status == status)
            && self.client_id.is_none_or(|id| product.client_id == id)
    }
}
