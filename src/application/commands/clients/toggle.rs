use super::{ClientCommandService, service::{client_not_found, parse_client_id}};
use crate::{
    application::{
        dto::{AuthenticatedUser, ClientDto},
        error::ApplicationResult,
        services::require_admin,
    },
    domain::{
        audit::{AuditAction, AuditChanges, AuditTarget},
        client::ClientUpdate,
    },
};

pub struct SetClientActiveCommand {
    pub id: i64,
    pub is_active: bool,
}

impl ClientCommandService {
    /// Admin only. Audited as ENABLE or DISABLE per the requested value,
    /// even when the flag already had that value.
    pub async fn set_client_active(
        &self,
        actor: &AuthenticatedUser,
        command: SetClientActiveCommand,
    ) -> ApplicationResult<ClientDto> {
        require_admin(actor)?;
        let id = parse_client_id(command.id)?;

        let mut uow = self.uow_factory.begin().await?;
        let before = uow
            .lock_client(id)
            .await?
            .ok_or_else(|| client_not_found(command.id))?;
        let old_status = before.is_active;

        let updated = uow
            .update_client(ClientUpdate::new(id).with_is_active(command.is_active))
            .await?;
        let dto = ClientDto::from(updated);

        let action = AuditAction::for_active_flag(command.is_active);
        self.audit
            .record(
                &mut *uow,
                actor,
                action,
                AuditTarget::Client,
                dto.id,
                AuditChanges::StatusChanged {
                    old_status,
                    new_status: dto.is_active,
                },
            )
            .await?;
        uow.commit().await?;

        tracing::info!(actor = %actor.login, client_id = dto.id, %action, "client activity toggled");
        Ok(dto)
    }
}
