use std::sync::Arc;

use crate::{
    application::{
        commands::AuditRecorder,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{product::ProductId, unit_of_work::UnitOfWorkFactory},
};

pub struct ProductCommandService {
    pub(super) uow_factory: Arc<dyn UnitOfWorkFactory>,
    pub(super) audit: Arc<AuditRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        uow_factory: Arc<dyn UnitOfWorkFactory>,
        audit: Arc<AuditRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            uow_factory,
            audit,
            clock,
        }
    }
}

pub(super) fn product_not_found(id: i64) -> ApplicationError {
    ApplicationError::not_found(format!("product with id {id} not found"))
}

pub(super) fn parse_product_id(id: i64) -> ApplicationResult<ProductId> {
    ProductId::new(id).map_err(|_| product_not_found(id))
}
