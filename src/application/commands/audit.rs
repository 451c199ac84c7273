// src/application/commands/audit.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        audit::{AuditAction, AuditChanges, AuditLog, AuditTarget, NewAuditLog},
        unit_of_work::UnitOfWork,
    },
};

/// Writes the audit record for a mutation into the mutation's own unit of work.
pub struct AuditRecorder {
    clock: Arc<dyn Clock>,
}

impl AuditRecorder {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Any failure is reported as `Internal`; the caller must then drop the
    /// unit of work so the entity change is rolled back with it.
    pub async fn record(
        &self,
        uow: &mut dyn UnitOfWork,
        actor: &AuthenticatedUser,
        action: AuditAction,
        target: AuditTarget,
        target_id: i64,
        changes: AuditChanges,
    ) -> ApplicationResult<AuditLog> {
        let entry = NewAuditLog {
            timestamp: self.clock.now(),
            action,
            user_id: actor.id,
            target,
            target_id,
            changes,
        };

        uow.append_audit(entry).await.map_err(|err| {
            tracing::error!(
                error = %err,
                actor = %actor.login,
                %action,
                %target,
                target_id,
                "failed to append audit record"
            );
            ApplicationError::internal(format!("audit write failed: {err}"))
        })
    }
}
