// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_audit_log;
mod postgres_client;
mod postgres_product;
mod postgres_unit_of_work;
mod postgres_user;

pub use error::map_sqlx;
pub use memory::InMemoryCrmStore;
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_client::PostgresClientReadRepository;
pub use postgres_product::PostgresProductReadRepository;
pub use postgres_unit_of_work::PostgresUnitOfWorkFactory;
pub use postgres_user::PostgresUserRepository;
