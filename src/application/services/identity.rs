// src/application/services/identity.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::security::TokenManager,
    },
    domain::user::{Login, UserRepository},
};

const INVALID_TOKEN: &str = "could not validate credentials";
const NOT_ADMIN: &str = "the user doesn't have enough privileges";

/// Maps a bearer token to the user it was issued for.
pub struct IdentityResolver {
    token_manager: Arc<dyn TokenManager>,
    user_repo: Arc<dyn UserRepository>,
}

impl IdentityResolver {
    pub fn new(token_manager: Arc<dyn TokenManager>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            token_manager,
            user_repo,
        }
    }

    /// Bad signature, expiry, a malformed subject and an unknown login all
    /// collapse into the same `Unauthenticated` error.
    pub async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let verified = self
            .token_manager
            .verify(token)
            .await
            .ok_or_else(|| ApplicationError::unauthenticated(INVALID_TOKEN))?;

        let login = Login::new(verified.subject)
            .map_err(|_| ApplicationError::unauthenticated(INVALID_TOKEN))?;

        let user = self
            .user_repo
            .find_by_login(&login)
            .await?
            .ok_or_else(|| ApplicationError::unauthenticated(INVALID_TOKEN))?;

        Ok(AuthenticatedUser::from_user(user))
    }
}

pub fn require_admin(user: &AuthenticatedUser) -> ApplicationResult<&AuthenticatedUser> {
    if user.is_admin() {
        Ok(user)
    } else {
        Err(ApplicationError::forbidden(NOT_ADMIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserId};

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId(7),
            login: Login::new("someone").unwrap(),
            role,
        }
    }

    #[test]
    fn admin_passes_through() {
        let admin = user(Role::Admin);
        assert_eq!(require_admin(&admin).unwrap().id, UserId(7));
    }

    #[test]
    fn regular_user_is_forbidden() {
        let err = require_admin(&user(Role::User)).unwrap_err();
        assert!(matches!(err, ApplicationError::Forbidden(_)));
    }
}
