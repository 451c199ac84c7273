use super::{ClientCommandService, service::{client_not_found, parse_client_id}};
use crate::{
    application::{
        dto::{AuthenticatedUser, ClientDto},
        error::{ApplicationError, ApplicationResult},
        services::require_admin,
    },
    domain::audit::{AuditAction, AuditChanges, AuditTarget},
};

pub struct DeleteClientCommand {
    pub id: i64,
}

impl ClientCommandService {
    /// Admin only. A client that still owns products cannot be deleted.
    pub async fn delete_client(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteClientCommand,
    ) -> ApplicationResult<()> {
        require_admin(actor)?;
        let id = parse_client_id(command.id)?;

        let mut uow = self.uow_factory.begin().await?;
        let client = uow
            .lock_client(id)
            .await?
            .ok_or_else(|| client_not_found(command.id))?;

        let owned = uow.count_products_for_client(id).await?;
        if owned > 0 {
            return Err(ApplicationError::conflict(format!(
                "client with id {} still has {owned} product(s)",
                command.id
            )));
        }

        let deleted_data = ClientDto::from(client).snapshot()?;
        self.audit
            .record(
                &mut *uow,
                actor,
                AuditAction::Delete,
                AuditTarget::Client,
                command.id,
                AuditChanges::Deleted { deleted_data },
            )
            .await?;
        uow.delete_client(id).await?;
        uow.commit().await?;

        tracing::info!(actor = %actor.login, client_id = command.id, action = "delete", "client deleted");
        Ok(())
    }
}
