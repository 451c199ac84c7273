// src/application/services/mod.rs
use std::sync::Arc;

mod identity;

pub use identity::{IdentityResolver, require_admin};

use crate::{
    application::{
        ApplicationResult,
        commands::{
            AuditRecorder, auth::AuthCommandService, clients::ClientCommandService,
            products::ProductCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{ClockPort, PasswordHasherPort, TokenManagerPort},
        queries::{
            audit::AuditQueryService, clients::ClientQueryService, products::ProductQueryService,
        },
    },
    domain::{
        audit::AuditLogRepository, client::ClientReadRepository, product::ProductReadRepository,
        unit_of_work::UnitOfWorkFactory, user::UserRepository,
    },
};

/// Storage adapters the application layer runs against.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub clients: Arc<dyn ClientReadRepository>,
    pub products: Arc<dyn ProductReadRepository>,
    pub audit_logs: Arc<dyn AuditLogRepository>,
    pub unit_of_work: Arc<dyn UnitOfWorkFactory>,
}

pub struct ApplicationServices {
    pub auth_commands: Arc<AuthCommandService>,
    pub user_commands: Arc<UserCommandService>,
    pub client_commands: Arc<ClientCommandService>,
    pub client_queries: Arc<ClientQueryService>,
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
    identity: Arc<IdentityResolver>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let audit = Arc::new(AuditRecorder::new(Arc::clone(&clock)));

        let auth_commands = Arc::new(AuthCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
        ));
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
        ));
        let client_commands = Arc::new(ClientCommandService::new(
            Arc::clone(&repos.unit_of_work),
            Arc::clone(&audit),
            Arc::clone(&clock),
        ));
        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&repos.unit_of_work),
            Arc::clone(&audit),
            Arc::clone(&clock),
        ));
        let identity = Arc::new(IdentityResolver::new(
            Arc::clone(&token_manager),
            Arc::clone(&repos.users),
        ));

        Self {
            auth_commands,
            user_commands,
            client_commands,
            client_queries: Arc::new(ClientQueryService::new(repos.clients)),
            product_commands,
            product_queries: Arc::new(ProductQueryService::new(repos.products)),
            audit_queries: Arc::new(AuditQueryService::new(repos.audit_logs)),
            identity,
        }
    }

    /// Resolve a raw bearer token to the acting user.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.identity.resolve(token).await
    }
}
