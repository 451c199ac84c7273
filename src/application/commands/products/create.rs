use super::ProductCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, AuditChanges, AuditTarget},
        client::ClientId,
        product::{NewProduct, ProductName, ProductStatus},
    },
};

pub struct CreateProductCommand {
    pub name: String,
    pub status: Option<ProductStatus>,
    pub client_id: i64,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        actor: &AuthenticatedUser,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let name = ProductName::new(command.name)?;
        let missing_client = || {
            ApplicationError::not_found(format!("client with id {} not found", command.client_id))
        };
        let client_id = ClientId::new(command.client_id).map_err(|_| missing_client())?;

        let mut uow = self.uow_factory.begin().await?;
        // Holding the client lock keeps a concurrent delete from orphaning the product.
        uow.lock_client(client_id)
            .await?
            .ok_or_else(missing_client)?;

        let product = uow
            .insert_product(NewProduct {
                name,
                status: command.status.unwrap_or_default(),
                created_at: self.clock.now(),
                client_id,
            })
            .await?;
        let dto = ProductDto::from(product);

        self.audit
            .record(
                &mut *uow,
                actor,
                AuditAction::Create,
                AuditTarget::Product,
                dto.id,
                AuditChanges::Created {
                    new_data: dto.snapshot()?,
                },
            )
            .await?;
        uow.commit().await?;

        tracing::info!(actor = %actor.login, product_id = dto.id, action = "create", "product created");
        Ok(dto)
    }
}
