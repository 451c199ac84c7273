use std::sync::Arc;

use crate::{
    application::{
        commands::AuditRecorder,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{client::ClientId, unit_of_work::UnitOfWorkFactory},
};

/// Client mutations; every successful call commits exactly one audit record
/// in the same transaction as the change itself.
pub struct ClientCommandService {
    pub(super) uow_factory: Arc<dyn UnitOfWorkFactory>,
    pub(super) audit: Arc<AuditRecorder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ClientCommandService {
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

pub(super) fn client_not_found(id: i64) -> ApplicationError {
    ApplicationError::not_found(format!("client with id {id} not found"))
}

/// Non-positive ids can never exist, so they read as not found.
pub(super) fn parse_client_id(id: i64) -> ApplicationResult<ClientId> {
    ClientId::new(id).map_err(|_| client_not_found(id))
}
