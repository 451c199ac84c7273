use super::{ProductCommandService, service::{parse_product_id, product_not_found}};
use crate::{
    application::{
        dto::{AuthenticatedUser, ProductDto},
        error::ApplicationResult,
        services::require_admin,
    },
    domain::audit::{AuditAction, AuditChanges, AuditTarget},
};

pub struct DeleteProductCommand {
    pub id: i64,
}

impl ProductCommandService {
    /// Admin only.
    pub async fn delete_product(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteProductCommand,
    ) -> ApplicationResult<()> {
        require_admin(actor)?;
        let id = parse_product_id(command.id)?;

        let mut uow = self.uow_factory.begin().await?;
        let product = uow
            .lock_product(id)
            .await?
            .ok_or_else(|| product_not_found(command.id))?;

        self.audit
            .record(
                &mut *uow,
                actor,
                AuditAction::Delete,
                AuditTarget::Product,
                command.id,
                AuditChanges::Deleted {
                    deleted_data: ProductDto::from(product).snapshot()?,
                },
            )
            .await?;
        uow.delete_product(id).await?;
        uow.commit().await?;

        tracing::info!(actor = %actor.login, product_id = command.id, action = "delete", "product deleted");
        Ok(())
    }
}
