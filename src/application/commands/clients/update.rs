use super::{ClientCommandService, service::{client_not_found, parse_client_id}};
use crate::{
    application::{
        dto::{AuthenticatedUser, ClientDto},
        error::ApplicationResult,
        services::require_admin,
    },
    domain::{
        audit::{AuditAction, AuditChanges, AuditTarget},
        client::{ClientSex, ClientUpdate, FullName, PhoneNumber},
    },
};

/// Partial update; absent fields keep their stored value. Setting
/// `is_active` requires the admin role.
pub struct UpdateClientCommand {
    pub id: i64,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub sex: Option<ClientSex>,
    pub is_active: Option<bool>,
}

impl UpdateClientCommand {
    fn into_update(self) -> ApplicationResult<ClientUpdate> {
        let mut update = ClientUpdate::new(parse_client_id(self.id)?);
        if let Some(full_name) = self.full_name {
            update = update.with_full_name(FullName::new(full_name)?);
        }
        if let Some(phone) = self.phone {
            update = update.with_phone(PhoneNumber::new(phone)?);
        }
        if let Some(sex) = self.sex {
            update = update.with_sex(sex);
        }
        if let Some(is_active) = self.is_active {
            update = update.with_is_active(is_active);
        }
        Ok(update)
    }
}

impl ClientCommandService {
    pub async fn update_client(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateClientCommand,
    ) -> ApplicationResult<ClientDto> {
        // Changing the active flag is an admin operation, same as the toggle.
        if command.is_active.is_some() {
            require_admin(actor)?;
        }
        let raw_id = command.id;
        let update = command.into_update()?;

        let mut uow = self.uow_factory.begin().await?;
        let before = uow
            .lock_client(update.id)
            .await?
            .ok_or_else(|| client_not_found(raw_id))?;
        let old_data = ClientDto::from(before).snapshot()?;

        let updated = uow.update_client(update).await?;
        let dto = ClientDto::from(updated);

        self.audit
            .record(
                &mut *uow,
                actor,
                AuditAction::Update,
                AuditTarget::Client,
                dto.id,
                AuditChanges::Updated {
                    old_data,
                    new_data: dto.snapshot()?,
                },
            )
            .await?;
        uow.commit().await?;

        tracing::info!(actor = %actor.login, client_id = dto.id, action = "update", "client updated");
        Ok(dto)
    }
}
