use super::{ProductCommandService, service::{parse_product_id, product_not_found}};
use crate::{
    application::{
        dto::{AuthenticatedUser, ProductDto},
        error::ApplicationResult,
    },
    domain::{
        audit::{AuditAction, AuditChanges, AuditTarget},
        product::{ProductName, ProductStatus, ProductUpdate},
    },
};

pub struct UpdateProductCommand {
    pub id: i64,
    pub name: Option<String>,
    pub status: Option<ProductStatus>,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        let id = parse_product_id(command.id)?;
        let mut update = ProductUpdate::new(id);
        if let Some(name) = command.name {
            update = update.with_name(ProductName::new(name)?);
        }
        if let Some(status) = command.status {
            update = update.with_status(status);
        }

        let mut uow = self.uow_factory.begin().await?;
        let before = uow
            .lock_product(id)
            .await?
            .ok_or_else(|| product_not_found(command.id))?;
        let old_data = ProductDto::from(before).snapshot()?;

        let updated = uow.update_product(update).await?;
        let dto = ProductDto::from(updated);

        self.audit
            .record(
                &mut *uow,
                actor,
                AuditAction::Update,
                AuditTarget::Product,
                dto.id,
                AuditChanges::Updated {
                    old_data,
                    new_data: dto.snapshot()?,
                },
            )
            .await?;
        uow.commit().await?;

        tracing::info!(actor = %actor.login, product_id = dto.id, action = "update", "product updated");
        Ok(dto)
    }
}
