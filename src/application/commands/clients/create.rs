use super::ClientCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ClientDto},
        error::ApplicationResult,
    },
    domain::{
        audit::{AuditAction, AuditChanges, AuditTarget},
        client::{ClientSex, FullName, NewClient, PhoneNumber},
    },
};

pub struct CreateClientCommand {
    pub full_name: String,
    pub phone: String,
    pub sex: ClientSex,
    pub is_active: Option<bool>,
}

impl ClientCommandService {
    pub async fn create_client(
        &self,
        actor: &AuthenticatedUser,
        command: CreateClientCommand,
    ) -> ApplicationResult<ClientDto> {
        let full_name = FullName::new(command.full_name)?;
        let phone = PhoneNumber::new(command.phone)?;

        let mut new_client =
            NewClient::new(full_name, phone, command.sex, self.clock.now(), actor.id);
        if let Some(is_active) = command.is_active {
            new_client = new_client.with_is_active(is_active);
        }

        let mut uow = self.uow_factory.begin().await?;
        let client = uow.insert_client(new_client).await?;
        let dto = ClientDto::from(client);

        self.audit
            .record(
                &mut *uow,
                actor,
                AuditAction::Create,
                AuditTarget::Client,
                dto.id,
                AuditChanges::Created {
                    new_data: dto.snapshot()?,
                },
            )
            .await?;
        uow.commit().await?;

        tracing::info!(actor = %actor.login, client_id = dto.id, action = "create", "client created");
        Ok(dto)
    }
}
